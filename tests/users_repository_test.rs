// ABOUTME: Live-database tests for the users repository
// ABOUTME: Cross-tenant denial, email lookup, duplicate email handling

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

#![allow(clippy::unwrap_used)]

mod common;

use rdl_api::database::repositories::{PgUsersRepository, UsersRepository};
use rdl_api::database::DatabaseError;
use rdl_core::models::{CreateUserParams, UpdateUserParams};
use serial_test::serial;
use uuid::Uuid;

fn sample_user_params() -> CreateUserParams {
    CreateUserParams {
        email: format!("{}@example.com", Uuid::new_v4()),
        name: "Ada Lovelace".into(),
        external_id: Uuid::new_v4().to_string(),
    }
}

#[tokio::test]
#[serial]
async fn test_user_crud_lifecycle() {
    let Some(ctx) = common::setup().await else {
        return;
    };
    let repo = PgUsersRepository::new(ctx.db.clone());

    let params = sample_user_params();
    let created = repo.create(params.clone(), ctx.tenant_a).await.unwrap();
    assert_eq!(created.email, params.email);
    assert_eq!(created.tenant_id, ctx.tenant_a);

    let by_email = repo.get_by_email(&params.email, ctx.tenant_a).await.unwrap();
    assert_eq!(by_email.id, created.id);

    let updated = repo
        .update(
            UpdateUserParams {
                id: created.id,
                name: Some("Grace Hopper".into()),
                ..Default::default()
            },
            ctx.tenant_a,
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Grace Hopper");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.external_id, created.external_id);

    assert_eq!(repo.delete(created.id, ctx.tenant_a).await.unwrap(), 1);
    assert!(matches!(
        repo.get_by_id(created.id, ctx.tenant_a).await,
        Err(DatabaseError::NotFound { .. })
    ));
}

#[tokio::test]
#[serial]
async fn test_cross_tenant_get_by_id_is_not_found() {
    let Some(ctx) = common::setup().await else {
        return;
    };
    let repo = PgUsersRepository::new(ctx.db.clone());

    let created = repo.create(sample_user_params(), ctx.tenant_a).await.unwrap();

    // Indistinguishable from true absence, which is the point.
    assert!(matches!(
        repo.get_by_id(created.id, ctx.tenant_b).await,
        Err(DatabaseError::NotFound { .. })
    ));
    assert!(matches!(
        repo.get_by_email(&created.email, ctx.tenant_b).await,
        Err(DatabaseError::NotFound { .. })
    ));
}

#[tokio::test]
#[serial]
async fn test_duplicate_email_per_tenant_is_already_exists() {
    let Some(ctx) = common::setup().await else {
        return;
    };
    let repo = PgUsersRepository::new(ctx.db.clone());

    let params = sample_user_params();
    repo.create(params.clone(), ctx.tenant_a).await.unwrap();
    assert!(matches!(
        repo.create(params.clone(), ctx.tenant_a).await,
        Err(DatabaseError::AlreadyExists { .. })
    ));

    // Uniqueness is per tenant; another tenant may reuse the email.
    assert!(repo.create(params, ctx.tenant_b).await.is_ok());
}

#[tokio::test]
#[serial]
async fn test_get_all_only_lists_own_tenant() {
    let Some(ctx) = common::setup().await else {
        return;
    };
    let repo = PgUsersRepository::new(ctx.db.clone());

    repo.create(sample_user_params(), ctx.tenant_a).await.unwrap();
    repo.create(sample_user_params(), ctx.tenant_a).await.unwrap();
    repo.create(sample_user_params(), ctx.tenant_b).await.unwrap();

    assert_eq!(repo.get_all(ctx.tenant_a).await.unwrap().len(), 2);
    assert_eq!(repo.get_all(ctx.tenant_b).await.unwrap().len(), 1);
}
