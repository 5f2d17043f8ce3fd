// ABOUTME: String codecs between domain enums and their TEXT column values
// ABOUTME: Unknown stored values surface as conversion errors, never defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use rdl_core::models::{ActionResult, ActionStatus, ActionType, EventStatus, EventType};

use super::super::errors::DbResult;

/// Parse a stored event type.
///
/// # Errors
///
/// Returns a conversion error for values outside the known set.
pub fn str_to_event_type(value: &str) -> DbResult<EventType> {
    Ok(EventType::try_from_str(value)?)
}

/// Parse a stored event status.
///
/// # Errors
///
/// Returns a conversion error for values outside the known set.
pub fn str_to_event_status(value: &str) -> DbResult<EventStatus> {
    Ok(EventStatus::try_from_str(value)?)
}

/// Parse a stored action type.
///
/// # Errors
///
/// Returns a conversion error for values outside the known set.
pub fn str_to_action_type(value: &str) -> DbResult<ActionType> {
    Ok(ActionType::try_from_str(value)?)
}

/// Parse a stored action status.
///
/// # Errors
///
/// Returns a conversion error for values outside the known set.
pub fn str_to_action_status(value: &str) -> DbResult<ActionStatus> {
    Ok(ActionStatus::try_from_str(value)?)
}

/// Parse a stored action result.
///
/// # Errors
///
/// Returns a conversion error for values outside the known set.
pub fn str_to_action_result(value: &str) -> DbResult<ActionResult> {
    Ok(ActionResult::try_from_str(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseError;

    #[test]
    fn test_known_values_round_trip() {
        assert_eq!(
            str_to_event_type(EventType::PaymentFailed.as_str()).unwrap(),
            EventType::PaymentFailed
        );
        assert_eq!(
            str_to_event_status(EventStatus::Processed.as_str()).unwrap(),
            EventStatus::Processed
        );
        assert_eq!(
            str_to_action_type(ActionType::PaymentRetry.as_str()).unwrap(),
            ActionType::PaymentRetry
        );
        assert_eq!(
            str_to_action_status(ActionStatus::InProgress.as_str()).unwrap(),
            ActionStatus::InProgress
        );
        assert_eq!(
            str_to_action_result(ActionResult::Success.as_str()).unwrap(),
            ActionResult::Success
        );
    }

    #[test]
    fn test_unknown_value_is_a_conversion_error() {
        let err = str_to_event_type("mystery").unwrap_err();
        assert!(matches!(err, DatabaseError::Conversion(_)));
    }
}
