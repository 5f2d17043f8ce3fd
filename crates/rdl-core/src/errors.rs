// ABOUTME: Typed conversion errors for enum and payload mappings
// ABOUTME: Guarantees conversions fail loudly instead of guessing a default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use thiserror::Error;

/// Error raised when a value cannot cross the domain/storage boundary.
///
/// Conversions in this crate are total over recognized inputs and never
/// default or panic on unrecognized ones; an unknown enum string or a
/// non-JSON payload always surfaces as one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A stored string does not correspond to any variant of the enum
    #[error("unrecognized {enum_name} value: {value:?}")]
    InvalidEnumValue {
        /// Name of the enum being parsed
        enum_name: &'static str,
        /// The offending underlying value
        value: String,
    },

    /// An opaque payload could not be converted into a JSON document
    #[error("invalid event payload: {0}")]
    InvalidPayload(String),
}

impl ConversionError {
    /// Build an `InvalidEnumValue` for the given enum and raw input
    #[must_use]
    pub fn invalid_enum(enum_name: &'static str, value: &str) -> Self {
        Self::InvalidEnumValue {
            enum_name,
            value: value.to_owned(),
        }
    }
}
