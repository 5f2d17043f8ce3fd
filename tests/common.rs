// ABOUTME: Shared setup for live-database integration tests
// ABOUTME: Tests skip silently unless TEST_DATABASE_URL points at a PostgreSQL server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

#![allow(clippy::unwrap_used, dead_code)]

use std::sync::Once;

use rdl_api::config::DatabaseConfig;
use rdl_api::database::{Database, TenantScope};
use rdl_core::models::{CreateEventParams, EventPayload, EventStatus, EventType, TenantId};
use uuid::Uuid;

static TRACING: Once = Once::new();

/// A connected database with two provisioned tenants.
pub struct TestDb {
    pub db: Database,
    pub tenant_a: TenantId,
    pub tenant_b: TenantId,
}

/// Connect, migrate, wipe all tables, and provision two tenants.
///
/// Returns `None` when `TEST_DATABASE_URL` is unset so the suite passes on
/// machines without a PostgreSQL server.
pub async fn setup() -> Option<TestDb> {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("rdl_api=debug")
            .with_test_writer()
            .try_init();
    });

    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping live-database test");
        return None;
    };

    let db = Database::connect(&DatabaseConfig::with_url(url))
        .await
        .unwrap();
    db.migrate().await.unwrap();

    // TRUNCATE is not subject to row-level security, so cleanup can run
    // straight on the pool.
    sqlx::query("TRUNCATE tenants, users, events, leaks, actions CASCADE")
        .execute(db.pool())
        .await
        .unwrap();

    let tenant_a = provision_tenant(&db, "tenant-a").await;
    let tenant_b = provision_tenant(&db, "tenant-b").await;

    Some(TestDb {
        db,
        tenant_a,
        tenant_b,
    })
}

/// Insert a row into the unprotected tenants table
pub async fn provision_tenant(db: &Database, name: &str) -> TenantId {
    let tenant_id = TenantId::new();
    sqlx::query("INSERT INTO tenants (id, name) VALUES ($1, $2)")
        .bind(tenant_id.as_uuid())
        .bind(name)
        .execute(db.pool())
        .await
        .unwrap();
    tenant_id
}

/// Insert a leak row (plus its backing event) under the tenant's scope,
/// returning the leak id for action tests.
pub async fn provision_leak(db: &Database, tenant_id: TenantId) -> Uuid {
    let mut scope = TenantScope::begin(db, tenant_id).await.unwrap();
    let event_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO events (id, tenant_id, provider_id, event_type, external_event_id, \
         status, payload) VALUES ($1, $2, $3, 'payment_failed', $4, 'pending', '{}')",
    )
    .bind(event_id)
    .bind(tenant_id.as_uuid())
    .bind(Uuid::new_v4())
    .bind(Uuid::new_v4().to_string())
    .execute(scope.executor().unwrap())
    .await
    .unwrap();

    let leak_id = Uuid::new_v4();
    sqlx::query("INSERT INTO leaks (id, tenant_id, event_id) VALUES ($1, $2, $3)")
        .bind(leak_id)
        .bind(tenant_id.as_uuid())
        .bind(event_id)
        .execute(scope.executor().unwrap())
        .await
        .unwrap();
    scope.commit().await.unwrap();
    leak_id
}

/// Event creation params with a unique external id
pub fn sample_event_params() -> CreateEventParams {
    CreateEventParams {
        provider_id: Uuid::new_v4(),
        event_type: EventType::PaymentFailed,
        external_event_id: Uuid::new_v4().to_string(),
        status: EventStatus::Pending,
        payload: EventPayload::Text(r#"{"amount": 4200, "currency": "usd"}"#.into()),
    }
}
