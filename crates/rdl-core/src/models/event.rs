// ABOUTME: Event domain model for ingested provider notifications
// ABOUTME: EventType/EventStatus enums, EventPayload sum type, create/update params
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ConversionError;

use super::TenantId;

/// Kind of provider notification that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A payment attempt failed
    PaymentFailed,
    /// A payment settled successfully
    PaymentSucceeded,
    /// A settled payment was refunded
    PaymentRefunded,
    /// Payment metadata changed upstream
    PaymentUpdated,
}

impl EventType {
    /// Storage string representation of this variant
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentFailed => "payment_failed",
            Self::PaymentSucceeded => "payment_succeeded",
            Self::PaymentRefunded => "payment_refunded",
            Self::PaymentUpdated => "payment_updated",
        }
    }

    /// Parse a storage string into an `EventType`
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidEnumValue` on unrecognized input;
    /// unknown values are never coerced to a default.
    pub fn try_from_str(s: &str) -> Result<Self, ConversionError> {
        match s {
            "payment_failed" => Ok(Self::PaymentFailed),
            "payment_succeeded" => Ok(Self::PaymentSucceeded),
            "payment_refunded" => Ok(Self::PaymentRefunded),
            "payment_updated" => Ok(Self::PaymentUpdated),
            other => Err(ConversionError::invalid_enum("event_type", other)),
        }
    }
}

/// Processing state of an ingested event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Ingested, not yet picked up by the pipeline
    Pending,
    /// Fully processed
    Processed,
    /// Processing failed
    Failed,
}

impl EventStatus {
    /// Storage string representation of this variant
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processed => "processed",
            Self::Failed => "failed",
        }
    }

    /// Parse a storage string into an `EventStatus`
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidEnumValue` on unrecognized input.
    pub fn try_from_str(s: &str) -> Result<Self, ConversionError> {
        match s {
            "pending" => Ok(Self::Pending),
            "processed" => Ok(Self::Processed),
            "failed" => Ok(Self::Failed),
            other => Err(ConversionError::invalid_enum("event_status", other)),
        }
    }
}

/// Opaque payload input accepted by event ingestion
///
/// Exactly two input shapes are representable: textual JSON and raw JSON
/// bytes. Anything else is impossible to construct, so conversion failures
/// reduce to "the bytes were not a JSON document".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    /// Payload supplied as a JSON string
    Text(String),
    /// Payload supplied as raw JSON bytes
    Binary(Vec<u8>),
}

impl EventPayload {
    /// Convert the payload into the JSON document stored in the database
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidPayload` if the input is not a
    /// well-formed JSON document.
    pub fn to_value(&self) -> Result<serde_json::Value, ConversionError> {
        match self {
            Self::Text(s) => serde_json::from_str(s)
                .map_err(|e| ConversionError::InvalidPayload(e.to_string())),
            Self::Binary(b) => serde_json::from_slice(b)
                .map_err(|e| ConversionError::InvalidPayload(e.to_string())),
        }
    }
}

impl From<&str> for EventPayload {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// An ingested webhook/provider notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier
    pub id: Uuid,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Provider that emitted the notification
    pub provider_id: Uuid,
    /// Kind of notification
    pub event_type: EventType,
    /// Provider-side identifier of the notification
    pub external_event_id: String,
    /// Processing state
    pub status: EventStatus,
    /// Opaque provider payload
    pub payload: serde_json::Value,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last updated
    pub updated_at: DateTime<Utc>,
}

/// Parameters for creating an event
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    /// Provider that emitted the notification
    pub provider_id: Uuid,
    /// Kind of notification
    pub event_type: EventType,
    /// Provider-side identifier, unique per tenant
    pub external_event_id: String,
    /// Initial processing state
    pub status: EventStatus,
    /// Opaque provider payload
    pub payload: EventPayload,
}

/// Parameters for a partial event update
///
/// Only `Some` fields are applied; `None` leaves the stored value intact.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    /// Event to update
    pub id: Uuid,
    /// New notification kind, if changing
    pub event_type: Option<EventType>,
    /// New processing state, if changing
    pub status: Option<EventStatus>,
    /// Replacement payload, if changing
    pub payload: Option<EventPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_round_trip() {
        for ty in [
            EventType::PaymentFailed,
            EventType::PaymentSucceeded,
            EventType::PaymentRefunded,
            EventType::PaymentUpdated,
        ] {
            assert_eq!(EventType::try_from_str(ty.as_str()).unwrap(), ty);
        }
    }

    #[test]
    fn test_event_type_rejects_unknown() {
        let err = EventType::try_from_str("invoice_opened").unwrap_err();
        assert_eq!(
            err,
            ConversionError::invalid_enum("event_type", "invoice_opened")
        );
    }

    #[test]
    fn test_event_status_round_trip() {
        for status in [EventStatus::Pending, EventStatus::Processed, EventStatus::Failed] {
            assert_eq!(EventStatus::try_from_str(status.as_str()).unwrap(), status);
        }
        assert!(EventStatus::try_from_str("done").is_err());
    }

    #[test]
    fn test_payload_text_to_value() {
        let payload = EventPayload::Text(r#"{"amount": 42}"#.into());
        let value = payload.to_value().unwrap();
        assert_eq!(value["amount"], 42);
    }

    #[test]
    fn test_payload_binary_to_value() {
        let payload = EventPayload::Binary(br#"{"ok": true}"#.to_vec());
        assert_eq!(payload.to_value().unwrap()["ok"], true);
    }

    #[test]
    fn test_payload_rejects_non_json() {
        assert!(EventPayload::Text("not json".into()).to_value().is_err());
        assert!(EventPayload::Binary(vec![0xff, 0xfe]).to_value().is_err());
    }
}
