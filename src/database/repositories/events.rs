// ABOUTME: PostgreSQL event repository: CRUD, scoped variants, batches, pagination
// ABOUTME: Row visibility comes from RLS via TenantScope, not query predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use async_trait::async_trait;
use rdl_core::models::{CreateEventParams, Event, TenantId, UpdateEventParams};
use rdl_core::pagination::{PaginatedResponse, PaginationParams};
use sqlx::PgConnection;
use tracing::debug;
use uuid::Uuid;

use super::super::errors::{DatabaseError, DbResult};
use super::super::shared::mappers;
use super::super::tenant_scope::TenantScope;
use super::super::Database;
use super::{EventsRepository, DEFAULT_LIST_LIMIT};

const ENTITY: &str = "event";

/// Event repository backed by the shared PostgreSQL pool
#[derive(Clone)]
pub struct PgEventsRepository {
    db: Database,
}

impl PgEventsRepository {
    /// Build a repository over `db`
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventsRepository for PgEventsRepository {
    async fn create(&self, params: CreateEventParams, tenant_id: TenantId) -> DbResult<Event> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let event = insert_event(scope.executor()?, &params, tenant_id).await?;
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, event_id = %event.id, "event created");
        Ok(event)
    }

    async fn get_by_id(&self, id: Uuid, tenant_id: TenantId) -> DbResult<Event> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let event = select_event(scope.executor()?, id).await?;
        scope.commit().await?;
        Ok(event)
    }

    async fn get_all(&self, tenant_id: TenantId) -> DbResult<Vec<Event>> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let events = select_event_page(scope.executor()?, DEFAULT_LIST_LIMIT, 0).await?;
        scope.commit().await?;
        Ok(events)
    }

    async fn get_all_paginated(
        &self,
        tenant_id: TenantId,
        params: PaginationParams,
    ) -> DbResult<PaginatedResponse<Event>> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        // Count and page run inside the same scope.
        let total_count = count_events(scope.executor()?).await?;
        let items = select_event_page(
            scope.executor()?,
            i64::from(params.limit),
            i64::from(params.offset),
        )
        .await?;
        scope.commit().await?;
        Ok(PaginatedResponse::new(items, total_count, params))
    }

    async fn update(&self, params: UpdateEventParams, tenant_id: TenantId) -> DbResult<Event> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let event = update_event(scope.executor()?, &params).await?;
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, event_id = %event.id, "event updated");
        Ok(event)
    }

    async fn delete(&self, id: Uuid, tenant_id: TenantId) -> DbResult<u64> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let rows = delete_event(scope.executor()?, id).await?;
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, event_id = %id, "event deleted");
        Ok(rows)
    }

    async fn count(&self, tenant_id: TenantId) -> DbResult<i64> {
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let total = count_events(scope.executor()?).await?;
        scope.commit().await?;
        Ok(total)
    }

    async fn create_in(
        &self,
        scope: &mut TenantScope,
        params: CreateEventParams,
        tenant_id: TenantId,
    ) -> DbResult<Event> {
        insert_event(scope.executor()?, &params, tenant_id).await
    }

    async fn get_by_id_in(
        &self,
        scope: &mut TenantScope,
        id: Uuid,
        _tenant_id: TenantId,
    ) -> DbResult<Event> {
        select_event(scope.executor()?, id).await
    }

    async fn update_in(
        &self,
        scope: &mut TenantScope,
        params: UpdateEventParams,
        _tenant_id: TenantId,
    ) -> DbResult<Event> {
        update_event(scope.executor()?, &params).await
    }

    async fn delete_in(
        &self,
        scope: &mut TenantScope,
        id: Uuid,
        _tenant_id: TenantId,
    ) -> DbResult<u64> {
        delete_event(scope.executor()?, id).await
    }

    async fn create_batch(
        &self,
        params: Vec<CreateEventParams>,
        tenant_id: TenantId,
    ) -> DbResult<Vec<Event>> {
        if params.is_empty() {
            return Ok(Vec::new());
        }
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let mut events = Vec::with_capacity(params.len());
        for p in &params {
            // First failure returns here; the dropped scope rolls everything back.
            events.push(insert_event(scope.executor()?, p, tenant_id).await?);
        }
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, count = events.len(), "event batch created");
        Ok(events)
    }

    async fn update_batch(
        &self,
        params: Vec<UpdateEventParams>,
        tenant_id: TenantId,
    ) -> DbResult<Vec<Event>> {
        if params.is_empty() {
            return Ok(Vec::new());
        }
        let mut scope = TenantScope::begin(&self.db, tenant_id).await?;
        let mut events = Vec::with_capacity(params.len());
        for p in &params {
            events.push(update_event(scope.executor()?, p).await?);
        }
        scope.commit().await?;
        debug!(tenant_id = %tenant_id, count = events.len(), "event batch updated");
        Ok(events)
    }
}

const EVENT_COLUMNS: &str =
    "id, tenant_id, provider_id, event_type, external_event_id, status, payload, \
     created_at, updated_at";

async fn insert_event(
    conn: &mut PgConnection,
    params: &CreateEventParams,
    tenant_id: TenantId,
) -> DbResult<Event> {
    // Convert before touching the database so a bad payload costs nothing.
    let payload = params.payload.to_value()?;
    let sql = format!(
        "INSERT INTO events (id, tenant_id, provider_id, event_type, external_event_id, \
         status, payload) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {EVENT_COLUMNS}"
    );
    let row = sqlx::query(&sql)
        .bind(Uuid::new_v4())
        .bind(tenant_id.as_uuid())
        .bind(params.provider_id)
        .bind(params.event_type.as_str())
        .bind(&params.external_event_id)
        .bind(params.status.as_str())
        .bind(payload)
        .fetch_one(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    mappers::parse_event_row(&row)
}

async fn select_event(conn: &mut PgConnection, id: Uuid) -> DbResult<Event> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    mappers::parse_event_row(&row)
}

async fn select_event_page(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> DbResult<Vec<Event>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at DESC, id LIMIT $1 OFFSET $2"
    );
    let rows = sqlx::query(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    rows.iter().map(mappers::parse_event_row).collect()
}

async fn count_events(conn: &mut PgConnection) -> DbResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    Ok(total)
}

async fn update_event(conn: &mut PgConnection, params: &UpdateEventParams) -> DbResult<Event> {
    let payload = params
        .payload
        .as_ref()
        .map(rdl_core::models::EventPayload::to_value)
        .transpose()?;
    let sql = format!(
        "UPDATE events SET \
         event_type = COALESCE($2, event_type), \
         status = COALESCE($3, status), \
         payload = COALESCE($4, payload), \
         updated_at = now() \
         WHERE id = $1 RETURNING {EVENT_COLUMNS}"
    );
    let row = sqlx::query(&sql)
        .bind(params.id)
        .bind(params.event_type.map(|t| t.as_str()))
        .bind(params.status.map(|s| s.as_str()))
        .bind(payload)
        .fetch_one(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    mappers::parse_event_row(&row)
}

async fn delete_event(conn: &mut PgConnection, id: Uuid) -> DbResult<u64> {
    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await
        .map_err(|e| DatabaseError::from_sqlx(e, ENTITY))?;
    let rows = result.rows_affected();
    if rows == 0 {
        return Err(DatabaseError::NotFound { entity: ENTITY });
    }
    Ok(rows)
}
