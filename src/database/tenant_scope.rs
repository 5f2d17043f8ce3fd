// ABOUTME: Tenant context scope guard binding RLS session values to a transaction
// ABOUTME: All tenant-scoped reads and writes must run through one of these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use rdl_core::models::TenantId;
use sqlx::{PgConnection, Postgres, Transaction};
use tracing::{debug, error, warn};

use super::errors::DatabaseError;
use super::Database;

/// RAII guard over a transaction carrying tenant-isolation session values.
///
/// Row-level security policies read `app.current_tenant_id` and
/// `app.is_service_account` through `current_setting(..., true)`. The guard
/// sets both with `set_config(..., true)`, so the values are transaction-local
/// and vanish on commit or rollback. A connection returned to the pool never
/// carries a stale tenant.
///
/// Dropping the guard without calling [`commit`](Self::commit) rolls the
/// transaction back and logs a warning; explicit
/// [`rollback`](Self::rollback) does the same silently.
pub struct TenantScope {
    // None once the guard has been consumed by commit or rollback.
    tx: Option<Transaction<'static, Postgres>>,
    tenant_id: Option<TenantId>,
}

impl TenantScope {
    /// Open a scope bound to `tenant_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::ContextSetup`] when the tenant id is nil or
    /// a session value cannot be set, and a classified error when the
    /// transaction cannot be started.
    pub async fn begin(db: &Database, tenant_id: TenantId) -> Result<Self, DatabaseError> {
        if tenant_id.is_nil() {
            return Err(DatabaseError::ContextSetup {
                reason: "tenant id must not be nil",
            });
        }

        let mut tx = db
            .pool()
            .begin()
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, "tenant scope"))?;

        set_session_value(&mut tx, "app.current_tenant_id", &tenant_id.to_string())
            .await
            .map_err(|e| {
                error!(tenant_id = %tenant_id, error = %e, "failed to set tenant session value");
                DatabaseError::ContextSetup {
                    reason: "could not set current tenant id",
                }
            })?;
        set_session_value(&mut tx, "app.is_service_account", "false")
            .await
            .map_err(|e| {
                error!(tenant_id = %tenant_id, error = %e, "failed to clear service account flag");
                DatabaseError::ContextSetup {
                    reason: "could not clear service account flag",
                }
            })?;

        debug!(tenant_id = %tenant_id, "tenant scope opened");
        Ok(Self {
            tx: Some(tx),
            tenant_id: Some(tenant_id),
        })
    }

    /// Open a scope with the service-account flag set, bypassing tenant
    /// filtering for trusted internal work such as health probes.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::ContextSetup`] when the session value cannot
    /// be set, and a classified error when the transaction cannot be started.
    pub async fn service_account(db: &Database) -> Result<Self, DatabaseError> {
        let mut tx = db
            .pool()
            .begin()
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, "tenant scope"))?;

        set_session_value(&mut tx, "app.is_service_account", "true")
            .await
            .map_err(|e| {
                error!(error = %e, "failed to set service account flag");
                DatabaseError::ContextSetup {
                    reason: "could not set service account flag",
                }
            })?;

        debug!("service account scope opened");
        Ok(Self {
            tx: Some(tx),
            tenant_id: None,
        })
    }

    /// Tenant this scope is bound to, or `None` for a service-account scope
    #[must_use]
    pub const fn tenant_id(&self) -> Option<TenantId> {
        self.tenant_id
    }

    /// Executor for statements that must run inside this scope.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::ContextSetup`] if the scope was already
    /// consumed by commit or rollback.
    pub fn executor(&mut self) -> Result<&mut PgConnection, DatabaseError> {
        self.tx
            .as_deref_mut()
            .ok_or(DatabaseError::ContextSetup {
                reason: "scope already consumed",
            })
    }

    /// Commit the scoped transaction, making its writes visible.
    ///
    /// # Errors
    ///
    /// Returns a classified error when the commit fails; the transaction is
    /// rolled back by the driver in that case.
    pub async fn commit(mut self) -> Result<(), DatabaseError> {
        if let Some(tx) = self.tx.take() {
            tx.commit()
                .await
                .map_err(|e| DatabaseError::from_sqlx(e, "tenant scope"))?;
        }
        Ok(())
    }

    /// Roll the scoped transaction back, discarding its writes.
    ///
    /// # Errors
    ///
    /// Returns a classified error when the rollback itself fails.
    pub async fn rollback(mut self) -> Result<(), DatabaseError> {
        if let Some(tx) = self.tx.take() {
            tx.rollback()
                .await
                .map_err(|e| DatabaseError::from_sqlx(e, "tenant scope"))?;
        }
        Ok(())
    }
}

impl Drop for TenantScope {
    fn drop(&mut self) {
        if self.tx.is_some() {
            warn!(
                tenant_id = ?self.tenant_id,
                "tenant scope dropped without commit, transaction will roll back"
            );
        }
    }
}

/// Run `SELECT set_config(name, value, true)`; the trailing `true` makes the
/// value transaction-local, which is what keeps pooled connections clean.
async fn set_session_value(
    tx: &mut Transaction<'static, Postgres>,
    name: &str,
    value: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT set_config($1, $2, true)")
        .bind(name)
        .bind(value)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
