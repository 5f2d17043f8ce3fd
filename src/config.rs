// ABOUTME: Environment-driven configuration for the database pool
// ABOUTME: Reads DATABASE_URL and pool tuning knobs with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default maximum number of pooled connections
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default timeout for acquiring a connection from the pool
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Connection pool configuration, environment-only
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// How long a caller may wait for a pooled connection
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Load configuration from the environment.
    ///
    /// `DATABASE_URL` is required; `DATABASE_MAX_CONNECTIONS` and
    /// `DATABASE_ACQUIRE_TIMEOUT_SECS` fall back to defaults when unset.
    ///
    /// # Errors
    /// Returns an error if `DATABASE_URL` is missing or a tuning knob is
    /// set but not parseable.
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let acquire_timeout_secs = match env::var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("DATABASE_ACQUIRE_TIMEOUT_SECS must be a positive integer")?,
            Err(_) => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        anyhow::ensure!(max_connections > 0, "DATABASE_MAX_CONNECTIONS must be > 0");

        Ok(Self {
            url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    /// Build a configuration from an explicit URL with default pool tuning
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_url_defaults() {
        let config = DatabaseConfig::with_url("postgres://localhost/rdl");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(
            config.acquire_timeout,
            Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS)
        );
    }
}
