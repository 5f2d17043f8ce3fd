// ABOUTME: PostgreSQL access layer: pool, schema migration with RLS, repositories
// ABOUTME: Everything tenant-visible flows through TenantScope and the repository traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

pub mod errors;
pub mod repositories;
pub mod shared;
pub mod tenant_scope;

pub use errors::{DatabaseError, DbResult};
pub use tenant_scope::TenantScope;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Handle to the PostgreSQL pool.
///
/// Cloning is cheap; the pool itself is reference-counted.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the configured pool limits.
    ///
    /// # Errors
    ///
    /// Returns a classified error when the server is unreachable.
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, "database"))?;

        info!(
            max_connections = config.max_connections,
            "database pool established"
        );
        Ok(Self { pool })
    }

    /// Wrap an existing pool, mainly for tests that manage their own
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verify connectivity with a trivial round trip.
    ///
    /// # Errors
    ///
    /// Returns a classified error when the round trip fails.
    pub async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, "database"))?;
        Ok(())
    }

    /// Create the schema and row-level security policies.
    ///
    /// Idempotent: every statement tolerates the object already existing,
    /// and policies are dropped and recreated so definition changes apply.
    ///
    /// # Errors
    ///
    /// Returns a classified error when any DDL statement fails.
    pub async fn migrate(&self) -> DbResult<()> {
        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::from_sqlx(e, "schema"))?;
        }
        info!("schema migration complete");
        Ok(())
    }
}

/// Schema DDL, applied in order.
///
/// Tenant-owned tables carry a `tenant_id` column and an RLS policy that
/// compares it to the `app.current_tenant_id` session value. Actions have no
/// tenant column; their policy reaches through the owning leak, which is
/// itself RLS-filtered. The `app.is_service_account` flag short-circuits
/// every policy for trusted internal work.
const SCHEMA_STATEMENTS: &[&str] = &[
    r"CREATE TABLE IF NOT EXISTS tenants (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    r"CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        tenant_id UUID NOT NULL REFERENCES tenants(id),
        email TEXT NOT NULL,
        name TEXT NOT NULL,
        external_id TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        UNIQUE (tenant_id, email)
    )",
    r"CREATE TABLE IF NOT EXISTS events (
        id UUID PRIMARY KEY,
        tenant_id UUID NOT NULL REFERENCES tenants(id),
        provider_id UUID NOT NULL,
        event_type TEXT NOT NULL,
        external_event_id TEXT NOT NULL,
        status TEXT NOT NULL,
        payload JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        UNIQUE (tenant_id, provider_id, external_event_id)
    )",
    r"CREATE TABLE IF NOT EXISTS leaks (
        id UUID PRIMARY KEY,
        tenant_id UUID NOT NULL REFERENCES tenants(id),
        event_id UUID NOT NULL REFERENCES events(id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    r"CREATE TABLE IF NOT EXISTS actions (
        id UUID PRIMARY KEY,
        leak_id UUID NOT NULL REFERENCES leaks(id),
        action_type TEXT NOT NULL,
        status TEXT NOT NULL,
        result TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "ALTER TABLE users ENABLE ROW LEVEL SECURITY",
    "ALTER TABLE users FORCE ROW LEVEL SECURITY",
    "ALTER TABLE events ENABLE ROW LEVEL SECURITY",
    "ALTER TABLE events FORCE ROW LEVEL SECURITY",
    "ALTER TABLE leaks ENABLE ROW LEVEL SECURITY",
    "ALTER TABLE leaks FORCE ROW LEVEL SECURITY",
    "ALTER TABLE actions ENABLE ROW LEVEL SECURITY",
    "ALTER TABLE actions FORCE ROW LEVEL SECURITY",
    "DROP POLICY IF EXISTS tenant_isolation ON users",
    r"CREATE POLICY tenant_isolation ON users
        USING (
            current_setting('app.is_service_account', true) = 'true'
            OR tenant_id::text = current_setting('app.current_tenant_id', true)
        )",
    "DROP POLICY IF EXISTS tenant_isolation ON events",
    r"CREATE POLICY tenant_isolation ON events
        USING (
            current_setting('app.is_service_account', true) = 'true'
            OR tenant_id::text = current_setting('app.current_tenant_id', true)
        )",
    "DROP POLICY IF EXISTS tenant_isolation ON leaks",
    r"CREATE POLICY tenant_isolation ON leaks
        USING (
            current_setting('app.is_service_account', true) = 'true'
            OR tenant_id::text = current_setting('app.current_tenant_id', true)
        )",
    "DROP POLICY IF EXISTS tenant_isolation ON actions",
    r"CREATE POLICY tenant_isolation ON actions
        USING (
            current_setting('app.is_service_account', true) = 'true'
            OR EXISTS (SELECT 1 FROM leaks WHERE leaks.id = actions.leak_id)
        )",
];
