// ABOUTME: PostgreSQL action repository: CRUD and pagination over the actions table
// ABOUTME: Actions are isolated through their owning leak row, never a tenant column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use async_trait::async_trait;
use rdl_core::models::{Action, CreateActionParams, TenantId, UpdateActionParams};
use rdl_core::pagination::{PaginatedResponse, PaginationParams};
use sqlx::PgConnection;
use tracing::debug;
use uuid::Uuid;

use super::super::errors::{DatabaseError, DbResult};
use super::super::shared::mappers;
use super::super::tenant_scope::TenantScope;
use super::super::Database;
use super::{ActionsRepository, DEFAULT_LIST_LIMIT};

const ENTITY: &str = "action";

/// Action repository backed by the shared PostgreSQL pool
#[derive(Clone)]
pub struct PgActionsRepository {
    db: Database,
}

impl PgActionsRepository {
    /// Build a repository over `db`
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActionsRepository for PgActionsRepository {
    async fn create(&self, params: CreateActionParams, tenant_id: TenantId) -> DbResult<Action> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let action = insert_action(scope.executor()?, &params).await?;
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, action_id = %action.id, "action created");
        Ok(action)
    }

    async fn get_by_id(&self, id: Uuid, tenant_id: TenantId) -> DbResult<Action> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let action = select_action(scope.executor()?, id).await?;
        scope.commit().await?;
        Ok(action)
    }

    async fn get_all(&self, tenant_id: TenantId) -> DbResult<Vec<Action>> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let actions = select_action_page(scope.executor()?, DEFAULT_LIST_LIMIT, 0).await?;
        scope.commit().await?;
        Ok(actions)
    }

    async fn get_all_paginated(
        &self,
        tenant_id: TenantId,
        params: PaginationParams,
    ) -> DbResult<PaginatedResponse<Action>> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let total_count = count_actions(scope.executor()?).await?;
        let items = select_action_page(
            scope.executor()?,
            i64::from(params.limit),
            i64::from(params.offset),
        )
        .await?;
        scope.commit().await?;
        Ok(PaginatedResponse::new(items, total_count, params))
    }

    async fn update(&self, params: UpdateActionParams, tenant_id: TenantId) -> DbResult<Action> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let sql = format!(
            "UPDATE actions SET \
             status = COALESCE($2, status), \
             result = COALESCE($3, result), \
             updated_at = now() \
             WHERE id = $1 RETURNING {ACTION_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(params.id)
            .bind(params.status.map(|s| s.as_str()))
            .bind(params.result.map(|r| r.as_str()))
            .fetch_one(scope.executor()?)
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
        let action = mappers::parse_action_row(&row)?;
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, action_id = %action.id, "action updated");
        Ok(action)
    }

    async fn delete(&self, id: Uuid, tenant_id: TenantId) -> DbResult<u64> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let result = sqlx::query("DELETE FROM actions WHERE id = $1")
            .bind(id)
            .execute(scope.executor()?)
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
        let rows = result.rows_affected();
        if rows == 0 {
            return Err(DatabaseError::NotFound { entity: ENTITY });
        }
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, action_id = %id, "action deleted");
        Ok(rows)
    }

    async fn count(&self, tenant_id: TenantId) -> DbResult<i64> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let total = count_actions(scope.executor()?).await?;
        scope.commit().await?;
        Ok(total)
    }
}

const ACTION_COLUMNS: &str =
    "id, leak_id, action_type, status, result, created_at, updated_at";

async fn insert_action(conn: &mut PgConnection, params: &CreateActionParams) -> DbResult<Action> {
    let sql = format!(
        "INSERT INTO actions (id, leak_id, action_type, status, result) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {ACTION_COLUMNS}"
    );
    let row = sqlx::query(&sql)
        .bind(Uuid::new_v4())
        .bind(params.leak_id)
        .bind(params.action_type.as_str())
        .bind(params.status.as_str())
        .bind(params.result.as_str())
        .fetch_one(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    mappers::parse_action_row(&row)
}

async fn select_action(conn: &mut PgConnection, id: Uuid) -> DbResult<Action> {
    let sql = format!("SELECT {ACTION_COLUMNS} FROM actions WHERE id = $1");
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    mappers::parse_action_row(&row)
}

async fn select_action_page(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> DbResult<Vec<Action>> {
    let sql = format!(
        "SELECT {ACTION_COLUMNS} FROM actions ORDER BY created_at DESC, id LIMIT $1 OFFSET $2"
    );
    let rows = sqlx::query(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    rows.iter().map(mappers::parse_action_row).collect()
}

async fn count_actions(conn: &mut PgConnection) -> DbResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM actions")
        .fetch_one(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    Ok(total)
}
