// ABOUTME: Live-database tests for the actions repository
// ABOUTME: Isolation flows through the owning leak row, not a tenant column

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

#![allow(clippy::unwrap_used)]

mod common;

use rdl_api::database::repositories::{ActionsRepository, PgActionsRepository};
use rdl_api::database::DatabaseError;
use rdl_core::models::{
    ActionResult, ActionStatus, ActionType, CreateActionParams, UpdateActionParams,
};
use serial_test::serial;
use uuid::Uuid;

fn sample_action_params(leak_id: Uuid) -> CreateActionParams {
    CreateActionParams {
        leak_id,
        action_type: ActionType::PaymentRetry,
        status: ActionStatus::Pending,
        result: ActionResult::Pending,
    }
}

#[tokio::test]
#[serial]
async fn test_action_crud_lifecycle() {
    let Some(ctx) = common::setup().await else {
        return;
    };
    let leak_id = common::provision_leak(&ctx.db, ctx.tenant_a).await;
    let repo = PgActionsRepository::new(ctx.db.clone());

    let created = repo
        .create(sample_action_params(leak_id), ctx.tenant_a)
        .await
        .unwrap();
    assert_eq!(created.leak_id, leak_id);
    assert_eq!(created.status, ActionStatus::Pending);
    assert_eq!(created.result, ActionResult::Pending);

    let updated = repo
        .update(
            UpdateActionParams {
                id: created.id,
                status: Some(ActionStatus::Completed),
                result: Some(ActionResult::Success),
            },
            ctx.tenant_a,
        )
        .await
        .unwrap();
    assert_eq!(updated.status, ActionStatus::Completed);
    assert_eq!(updated.result, ActionResult::Success);
    assert_eq!(updated.action_type, created.action_type);

    assert_eq!(repo.delete(created.id, ctx.tenant_a).await.unwrap(), 1);
    assert!(matches!(
        repo.get_by_id(created.id, ctx.tenant_a).await,
        Err(DatabaseError::NotFound { .. })
    ));
}

#[tokio::test]
#[serial]
async fn test_action_with_unknown_leak_is_denied() {
    let Some(ctx) = common::setup().await else {
        return;
    };
    let repo = PgActionsRepository::new(ctx.db.clone());

    // No visible leak row: the write-side policy rejects the insert, which
    // surfaces exactly like absence.
    assert!(matches!(
        repo.create(sample_action_params(Uuid::new_v4()), ctx.tenant_a)
            .await,
        Err(DatabaseError::NotFound { .. })
    ));
    assert_eq!(repo.count(ctx.tenant_a).await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn test_action_on_foreign_leak_is_denied() {
    let Some(ctx) = common::setup().await else {
        return;
    };
    let foreign_leak = common::provision_leak(&ctx.db, ctx.tenant_a).await;
    let repo = PgActionsRepository::new(ctx.db.clone());

    assert!(matches!(
        repo.create(sample_action_params(foreign_leak), ctx.tenant_b)
            .await,
        Err(DatabaseError::NotFound { .. })
    ));
}

#[tokio::test]
#[serial]
async fn test_actions_isolated_through_leak() {
    let Some(ctx) = common::setup().await else {
        return;
    };
    let leak_id = common::provision_leak(&ctx.db, ctx.tenant_a).await;
    let repo = PgActionsRepository::new(ctx.db.clone());

    let created = repo
        .create(sample_action_params(leak_id), ctx.tenant_a)
        .await
        .unwrap();

    // Tenant B cannot see the leak, so it cannot see the action.
    assert!(matches!(
        repo.get_by_id(created.id, ctx.tenant_b).await,
        Err(DatabaseError::NotFound { .. })
    ));
    assert!(repo.get_all(ctx.tenant_b).await.unwrap().is_empty());
    assert_eq!(repo.count(ctx.tenant_a).await.unwrap(), 1);
}
