// ABOUTME: Row-to-model mappers for the repository layer
// ABOUTME: try_get per column so a schema mismatch fails with the column name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use chrono::{DateTime, Utc};
use rdl_core::models::{Action, Event, TenantId, User};
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use super::super::errors::{DatabaseError, DbResult};
use super::enums;

/// Map an `events` row into the domain model
pub fn parse_event_row(row: &PgRow) -> DbResult<Event> {
    Ok(Event {
        id: get(row, "id", "event")?,
        tenant_id: TenantId::from_uuid(get::<Uuid>(row, "tenant_id", "event")?),
        provider_id: get(row, "provider_id", "event")?,
        event_type: enums::str_to_event_type(&get::<String>(row, "event_type", "event")?)?,
        external_event_id: get(row, "external_event_id", "event")?,
        status: enums::str_to_event_status(&get::<String>(row, "status", "event")?)?,
        payload: get(row, "payload", "event")?,
        created_at: get::<DateTime<Utc>>(row, "created_at", "event")?,
        updated_at: get::<DateTime<Utc>>(row, "updated_at", "event")?,
    })
}

/// Map an `actions` row into the domain model
pub fn parse_action_row(row: &PgRow) -> DbResult<Action> {
    Ok(Action {
        id: get(row, "id", "action")?,
        leak_id: get(row, "leak_id", "action")?,
        action_type: enums::str_to_action_type(&get::<String>(row, "action_type", "action")?)?,
        status: enums::str_to_action_status(&get::<String>(row, "status", "action")?)?,
        result: enums::str_to_action_result(&get::<String>(row, "result", "action")?)?,
        created_at: get::<DateTime<Utc>>(row, "created_at", "action")?,
        updated_at: get::<DateTime<Utc>>(row, "updated_at", "action")?,
    })
}

/// Map a `users` row into the domain model
pub fn parse_user_row(row: &PgRow) -> DbResult<User> {
    Ok(User {
        id: get(row, "id", "user")?,
        tenant_id: TenantId::from_uuid(get::<Uuid>(row, "tenant_id", "user")?),
        email: get(row, "email", "user")?,
        name: get(row, "name", "user")?,
        external_id: get(row, "external_id", "user")?,
        created_at: get::<DateTime<Utc>>(row, "created_at", "user")?,
        updated_at: get::<DateTime<Utc>>(row, "updated_at", "user")?,
    })
}

fn get<'r, T>(row: &'r PgRow, column: &'static str, entity: &'static str) -> DbResult<T>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DatabaseError::from_sqlx(e, entity))
}
