// ABOUTME: Main library entry point for the RDL API data access layer
// ABOUTME: Tenant-isolated PostgreSQL repositories for the revenue leak detection platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

#![deny(unsafe_code)]

//! # RDL API
//!
//! The tenant-isolated data access layer of the RDL revenue leak detection
//! platform. Every domain repository (events, actions, users) executes its
//! queries against one shared PostgreSQL pool while guaranteeing that no
//! query ever crosses tenant boundaries.
//!
//! ## Architecture
//!
//! - **`database`**: pool setup, the tenant context scope, the error
//!   classifier, and the per-aggregate repositories
//! - **`services`**: thin orchestration layer delegating to repositories
//! - **`config`**: environment-driven database configuration
//! - **`logging`**: structured `tracing` setup
//!
//! Isolation is delegated to PostgreSQL row-level security evaluated
//! against two transaction-local session values (`app.current_tenant_id`
//! and `app.is_service_account`). Repositories can only reach a connection
//! through [`database::TenantScope`], which sets both values with the
//! transaction-local form of `set_config` so they can never leak to an
//! unrelated request when the connection returns to the pool.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rdl_api::config::DatabaseConfig;
//! use rdl_api::database::repositories::{EventsRepository, PgEventsRepository};
//! use rdl_api::database::Database;
//! use rdl_core::models::{CreateEventParams, EventPayload, EventStatus, EventType, TenantId};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Database::connect(&DatabaseConfig::from_env()?).await?;
//!     let events = PgEventsRepository::new(db);
//!
//!     let tenant_id = TenantId::new();
//!     let event = events
//!         .create(
//!             CreateEventParams {
//!                 provider_id: Uuid::new_v4(),
//!                 event_type: EventType::PaymentFailed,
//!                 external_event_id: "evt_123".into(),
//!                 status: EventStatus::Pending,
//!                 payload: EventPayload::Text(r#"{"amount": 4200}"#.into()),
//!             },
//!             tenant_id,
//!         )
//!         .await?;
//!     println!("created event {}", event.id);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration for the database pool
pub mod config;

/// Database pool, tenant context scope, error classifier, and repositories
pub mod database;

/// Structured logging setup built on `tracing`
pub mod logging;

/// Thin domain services delegating to the repositories
pub mod services;
