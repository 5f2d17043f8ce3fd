// ABOUTME: Action domain model for leak remediation steps
// ABOUTME: ActionType/ActionStatus/ActionResult enums and create/update params
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ConversionError;

/// Kind of remediation taken for a detected leak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Notify the tenant by email
    EmailNotification,
    /// Retry the failed payment
    PaymentRetry,
    /// Suspend the affected subscription
    SubscriptionSuspend,
}

impl ActionType {
    /// Storage string representation of this variant
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmailNotification => "email_notification",
            Self::PaymentRetry => "payment_retry",
            Self::SubscriptionSuspend => "subscription_suspend",
        }
    }

    /// Parse a storage string into an `ActionType`
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidEnumValue` on unrecognized input.
    pub fn try_from_str(s: &str) -> Result<Self, ConversionError> {
        match s {
            "email_notification" => Ok(Self::EmailNotification),
            "payment_retry" => Ok(Self::PaymentRetry),
            "subscription_suspend" => Ok(Self::SubscriptionSuspend),
            other => Err(ConversionError::invalid_enum("action_type", other)),
        }
    }
}

/// Progress of a remediation action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    /// Created, not yet started
    Pending,
    /// Currently executing
    InProgress,
    /// Finished; see `ActionResult`
    Completed,
    /// Aborted by the executor
    Failed,
}

impl ActionStatus {
    /// Storage string representation of this variant
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Parse a storage string into an `ActionStatus`
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidEnumValue` on unrecognized input.
    pub fn try_from_str(s: &str) -> Result<Self, ConversionError> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(ConversionError::invalid_enum("action_status", other)),
        }
    }

    /// Whether the action may no longer be mutated
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Outcome of a remediation action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionResult {
    /// No outcome yet
    Pending,
    /// The remediation worked
    Success,
    /// The remediation did not work
    Failure,
}

impl ActionResult {
    /// Storage string representation of this variant
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    /// Parse a storage string into an `ActionResult`
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidEnumValue` on unrecognized input.
    pub fn try_from_str(s: &str) -> Result<Self, ConversionError> {
        match s {
            "pending" => Ok(Self::Pending),
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            other => Err(ConversionError::invalid_enum("action_result", other)),
        }
    }
}

/// A remediation step tied to a detected leak
///
/// Actions reference their leak rather than a tenant directly; tenant
/// isolation is enforced by the storage layer through the leak row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Unique action identifier
    pub id: Uuid,
    /// Leak this action remediates
    pub leak_id: Uuid,
    /// Kind of remediation
    pub action_type: ActionType,
    /// Progress state
    pub status: ActionStatus,
    /// Outcome once finished
    pub result: ActionResult,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last updated
    pub updated_at: DateTime<Utc>,
}

/// Parameters for creating an action
#[derive(Debug, Clone)]
pub struct CreateActionParams {
    /// Leak this action remediates
    pub leak_id: Uuid,
    /// Kind of remediation
    pub action_type: ActionType,
    /// Initial progress state
    pub status: ActionStatus,
    /// Initial outcome (normally `Pending`)
    pub result: ActionResult,
}

/// Parameters for a partial action update
#[derive(Debug, Clone, Default)]
pub struct UpdateActionParams {
    /// Action to update
    pub id: Uuid,
    /// New progress state, if changing
    pub status: Option<ActionStatus>,
    /// New outcome, if changing
    pub result: Option<ActionResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_enums_round_trip() {
        for ty in [
            ActionType::EmailNotification,
            ActionType::PaymentRetry,
            ActionType::SubscriptionSuspend,
        ] {
            assert_eq!(ActionType::try_from_str(ty.as_str()).unwrap(), ty);
        }
        for status in [
            ActionStatus::Pending,
            ActionStatus::InProgress,
            ActionStatus::Completed,
            ActionStatus::Failed,
        ] {
            assert_eq!(ActionStatus::try_from_str(status.as_str()).unwrap(), status);
        }
        for result in [ActionResult::Pending, ActionResult::Success, ActionResult::Failure] {
            assert_eq!(ActionResult::try_from_str(result.as_str()).unwrap(), result);
        }
    }

    #[test]
    fn test_action_enums_reject_unknown() {
        assert!(ActionType::try_from_str("carrier_pigeon").is_err());
        assert!(ActionStatus::try_from_str("paused").is_err());
        assert!(ActionResult::try_from_str("maybe").is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(ActionStatus::Completed.is_terminal());
        assert!(ActionStatus::Failed.is_terminal());
        assert!(!ActionStatus::Pending.is_terminal());
        assert!(!ActionStatus::InProgress.is_terminal());
    }
}
