// ABOUTME: Live-database test for the health plumbing
// ABOUTME: End-to-end ping through service, repository, and pool

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;

use rdl_api::database::repositories::PgHealthRepository;
use rdl_api::services::HealthService;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_health_check_round_trip() {
    let Some(ctx) = common::setup().await else {
        return;
    };
    let service = HealthService::new(Arc::new(PgHealthRepository::new(ctx.db.clone())));
    service.check().await.unwrap();
}
