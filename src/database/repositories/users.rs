// ABOUTME: PostgreSQL user repository: CRUD, email lookup, pagination
// ABOUTME: Row visibility comes from RLS via TenantScope, not query predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use async_trait::async_trait;
use rdl_core::models::{CreateUserParams, TenantId, UpdateUserParams, User};
use rdl_core::pagination::{PaginatedResponse, PaginationParams};
use sqlx::PgConnection;
use tracing::debug;
use uuid::Uuid;

use super::super::errors::{DatabaseError, DbResult};
use super::super::shared::mappers;
use super::super::tenant_scope::TenantScope;
use super::super::Database;
use super::{UsersRepository, DEFAULT_LIST_LIMIT};

const ENTITY: &str = "user";

/// User repository backed by the shared PostgreSQL pool
#[derive(Clone)]
pub struct PgUsersRepository {
    db: Database,
}

impl PgUsersRepository {
    /// Build a repository over `db`
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn create(&self, params: CreateUserParams, tenant_id: TenantId) -> DbResult<User> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let sql = format!(
            "INSERT INTO users (id, tenant_id, email, name, external_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(Uuid::new_v4())
            .bind(tenant_id.as_uuid())
            .bind(&params.email)
            .bind(&params.name)
            .bind(&params.external_id)
            .fetch_one(scope.executor()?)
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
        let user = mappers::parse_user_row(&row)?;
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, user_id = %user.id, "user created");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid, tenant_id: TenantId) -> DbResult<User> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_one(scope.executor()?)
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
        let user = mappers::parse_user_row(&row)?;
        scope.commit().await?;
        Ok(user)
    }

    async fn get_by_email(&self, email: &str, tenant_id: TenantId) -> DbResult<User> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_one(scope.executor()?)
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
        let user = mappers::parse_user_row(&row)?;
        scope.commit().await?;
        Ok(user)
    }

    async fn get_all(&self, tenant_id: TenantId) -> DbResult<Vec<User>> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let users = select_user_page(scope.executor()?, DEFAULT_LIST_LIMIT, 0).await?;
        scope.commit().await?;
        Ok(users)
    }

    async fn get_all_paginated(
        &self,
        tenant_id: TenantId,
        params: PaginationParams,
    ) -> DbResult<PaginatedResponse<User>> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let total_count = count_users(scope.executor()?).await?;
        let items = select_user_page(
            scope.executor()?,
            i64::from(params.limit),
            i64::from(params.offset),
        )
        .await?;
        scope.commit().await?;
        Ok(PaginatedResponse::new(items, total_count, params))
    }

    async fn update(&self, params: UpdateUserParams, tenant_id: TenantId) -> DbResult<User> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let sql = format!(
            "UPDATE users SET \
             email = COALESCE($2, email), \
             name = COALESCE($3, name), \
             external_id = COALESCE($4, external_id), \
             updated_at = now() \
             WHERE id = $1 RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(params.id)
            .bind(params.email.as_deref())
            .bind(params.name.as_deref())
            .bind(params.external_id.as_deref())
            .fetch_one(scope.executor()?)
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
        let user = mappers::parse_user_row(&row)?;
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, user_id = %user.id, "user updated");
        Ok(user)
    }

    async fn delete(&self, id: Uuid, tenant_id: TenantId) -> DbResult<u64> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(scope.executor()?)
            .await
            .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
        let rows = result.rows_affected();
        if rows == 0 {
            return Err(DatabaseError::NotFound { entity: ENTITY });
        }
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, user_id = %id, "user deleted");
        Ok(rows)
    }

    async fn count(&self, tenant_id: TenantId) -> DbResult<i64> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let total = count_users(scope.executor()?).await?;
        scope.commit().await?;
        Ok(total)
    }
}

const USER_COLUMNS: &str =
    "id, tenant_id, email, name, external_id, created_at, updated_at";

async fn select_user_page(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> DbResult<Vec<User>> {
    let sql = format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC, id LIMIT $1 OFFSET $2"
    );
    let rows = sqlx::query(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    rows.iter().map(mappers::parse_user_row).collect()
}

async fn count_users(conn: &mut PgConnection) -> DbResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    Ok(total)
}
