// ABOUTME: Storage error classifier mapping driver errors to the domain taxonomy
// ABOUTME: SQLSTATE-based, pure with respect to its inputs, never leaks raw driver text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use rdl_core::errors::ConversionError;
use thiserror::Error;
use tracing::{error, warn};

/// Result alias for database-layer operations
pub type DbResult<T> = Result<T, DatabaseError>;

/// Normalized database error taxonomy.
///
/// This is the only error type that crosses from the data access layer
/// into domain services. Classification is pure: the same SQLSTATE always
/// maps to the same variant, so callers and tests assert on kind rather
/// than matching strings.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Unique-constraint violation
    #[error("{entity} already exists")]
    AlreadyExists {
        /// Aggregate the statement was writing
        entity: &'static str,
    },

    /// Foreign-key constraint violation
    #[error("foreign key violation while writing {entity}")]
    ForeignKeyViolation {
        /// Aggregate the statement was writing
        entity: &'static str,
    },

    /// Not-null constraint violation
    #[error("not-null violation while writing {entity}")]
    NotNullViolation {
        /// Aggregate the statement was writing
        entity: &'static str,
    },

    /// Check constraint violation
    #[error("check violation while writing {entity}")]
    CheckViolation {
        /// Aggregate the statement was writing
        entity: &'static str,
    },

    /// No matching row; the only absence-is-not-a-fault case
    #[error("{entity} not found")]
    NotFound {
        /// Aggregate that was being read
        entity: &'static str,
    },

    /// A required relation is missing; infrastructure fault, not user error
    #[error("database unavailable")]
    Unavailable,

    /// The connection to the storage engine failed
    #[error("database connection failure")]
    ConnectionFailure,

    /// The statement was canceled before completion
    #[error("operation canceled")]
    Canceled,

    /// Waiting for a pooled connection exceeded the deadline
    #[error("operation timed out")]
    TimedOut,

    /// A value could not cross the domain/storage boundary
    #[error("conversion failure: {0}")]
    Conversion(#[from] ConversionError),

    /// The tenant or service-account session values could not be set
    #[error("failed to establish tenant context: {reason}")]
    ContextSetup {
        /// What part of scope setup failed
        reason: &'static str,
    },

    /// Unclassified storage error; the SQLSTATE is kept for diagnosis
    #[error("unclassified database error (sqlstate {code:?})")]
    Unknown {
        /// SQLSTATE reported by the driver, if any
        code: Option<String>,
    },
}

impl DatabaseError {
    /// Whether this error is the benign "row does not exist" signal
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Classify a raw sqlx error for an operation on `entity`.
    ///
    /// `RowNotFound` becomes [`DatabaseError::NotFound`]; pool exhaustion
    /// becomes [`DatabaseError::TimedOut`]; transport failures become
    /// [`DatabaseError::ConnectionFailure`]; server-reported errors go
    /// through [`classify_pg_code`]. Anything else is `Unknown`, logged
    /// with the original error so the code can be added to the table.
    #[must_use]
    pub fn from_sqlx(err: sqlx::Error, entity: &'static str) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound { entity },
            sqlx::Error::PoolTimedOut => Self::TimedOut,
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                Self::ConnectionFailure
            }
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.into_owned());
                match code.as_deref().and_then(|c| classify_pg_code(c, entity)) {
                    Some(classified) => {
                        warn!(
                            entity = entity,
                            sqlstate = code.as_deref().unwrap_or(""),
                            "classified database error"
                        );
                        classified
                    }
                    None => {
                        error!(
                            entity = entity,
                            sqlstate = ?code,
                            error = %db_err,
                            "unclassified database error"
                        );
                        Self::Unknown { code }
                    }
                }
            }
            other => {
                error!(entity = entity, error = %other, "unclassified driver error");
                Self::Unknown { code: None }
            }
        }
    }
}

/// Map a PostgreSQL SQLSTATE to a domain error kind.
///
/// Returns `None` for codes outside the classification table so the
/// caller can fall back to [`DatabaseError::Unknown`].
#[must_use]
pub fn classify_pg_code(code: &str, entity: &'static str) -> Option<DatabaseError> {
    match code {
        // unique_violation
        "23505" => Some(DatabaseError::AlreadyExists { entity }),
        // foreign_key_violation
        "23503" => Some(DatabaseError::ForeignKeyViolation { entity }),
        // not_null_violation
        "23502" => Some(DatabaseError::NotNullViolation { entity }),
        // check_violation
        "23514" => Some(DatabaseError::CheckViolation { entity }),
        // undefined_table: schema drift, surfaced as infrastructure fault
        "42P01" => Some(DatabaseError::Unavailable),
        // insufficient_privilege: an RLS policy rejected the write. The row
        // (or the row it references) is invisible to this tenant, which must
        // stay indistinguishable from absence.
        "42501" => Some(DatabaseError::NotFound { entity }),
        // query_canceled
        "57014" => Some(DatabaseError::Canceled),
        // class 08: connection exceptions
        _ if code.starts_with("08") => Some(DatabaseError::ConnectionFailure),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_table() {
        assert!(matches!(
            classify_pg_code("23505", "event"),
            Some(DatabaseError::AlreadyExists { entity: "event" })
        ));
        assert!(matches!(
            classify_pg_code("23503", "action"),
            Some(DatabaseError::ForeignKeyViolation { .. })
        ));
        assert!(matches!(
            classify_pg_code("23502", "event"),
            Some(DatabaseError::NotNullViolation { .. })
        ));
        assert!(matches!(
            classify_pg_code("23514", "event"),
            Some(DatabaseError::CheckViolation { .. })
        ));
        assert!(matches!(
            classify_pg_code("42P01", "event"),
            Some(DatabaseError::Unavailable)
        ));
        assert!(matches!(
            classify_pg_code("57014", "event"),
            Some(DatabaseError::Canceled)
        ));
        assert!(matches!(
            classify_pg_code("42501", "action"),
            Some(DatabaseError::NotFound { entity: "action" })
        ));
        assert!(matches!(
            classify_pg_code("08006", "event"),
            Some(DatabaseError::ConnectionFailure)
        ));
        assert!(classify_pg_code("22P02", "event").is_none());
    }

    #[test]
    fn test_classification_is_pure() {
        // Same code, same kind, regardless of how often it is asked.
        for _ in 0..3 {
            assert!(matches!(
                classify_pg_code("23505", "user"),
                Some(DatabaseError::AlreadyExists { entity: "user" })
            ));
        }
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = DatabaseError::from_sqlx(sqlx::Error::RowNotFound, "event");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_pool_timeout_maps_to_timed_out() {
        assert!(matches!(
            DatabaseError::from_sqlx(sqlx::Error::PoolTimedOut, "event"),
            DatabaseError::TimedOut
        ));
    }

    #[test]
    fn test_pool_closed_maps_to_connection_failure() {
        assert!(matches!(
            DatabaseError::from_sqlx(sqlx::Error::PoolClosed, "event"),
            DatabaseError::ConnectionFailure
        ));
    }

    #[test]
    fn test_conversion_error_wraps() {
        let err: DatabaseError =
            ConversionError::invalid_enum("event_type", "bogus").into();
        assert!(matches!(err, DatabaseError::Conversion(_)));
    }
}
