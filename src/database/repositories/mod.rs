// ABOUTME: Per-aggregate repository traits and their PostgreSQL implementations
// ABOUTME: Every method takes the tenant id explicitly; nothing runs unscoped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

pub mod actions;
pub mod events;
pub mod health;
pub mod users;

pub use actions::PgActionsRepository;
pub use events::PgEventsRepository;
pub use health::{PgHealthRepository, Pinger};
pub use users::PgUsersRepository;

use async_trait::async_trait;
use rdl_core::models::{
    Action, CreateActionParams, CreateEventParams, CreateUserParams, Event, TenantId,
    UpdateActionParams, UpdateEventParams, UpdateUserParams, User,
};
use rdl_core::pagination::{PaginatedResponse, PaginationParams};
use uuid::Uuid;

use super::errors::DbResult;
use super::tenant_scope::TenantScope;

/// Page bound applied by the unpaginated `get_all` reads
pub const DEFAULT_LIST_LIMIT: i64 = 1000;

/// Event persistence, scoped to one tenant per call.
///
/// The `*_in` variants run against a caller-supplied [`TenantScope`] so
/// several calls can be composed into one atomic unit; the caller owns the
/// commit. Everything else opens and commits its own scope.
#[async_trait]
pub trait EventsRepository: Send + Sync {
    /// Insert a new event
    async fn create(&self, params: CreateEventParams, tenant_id: TenantId) -> DbResult<Event>;

    /// Fetch one event by id; absent rows are `NotFound`, not a fault
    async fn get_by_id(&self, id: Uuid, tenant_id: TenantId) -> DbResult<Event>;

    /// Fetch events with the default page bound
    async fn get_all(&self, tenant_id: TenantId) -> DbResult<Vec<Event>>;

    /// Count and page inside one scope
    async fn get_all_paginated(
        &self,
        tenant_id: TenantId,
        params: PaginationParams,
    ) -> DbResult<PaginatedResponse<Event>>;

    /// Apply the `Some` fields of `params`, leaving the rest intact
    async fn update(&self, params: UpdateEventParams, tenant_id: TenantId) -> DbResult<Event>;

    /// Delete one event; zero rows affected is promoted to `NotFound`
    async fn delete(&self, id: Uuid, tenant_id: TenantId) -> DbResult<u64>;

    /// Count the tenant's events
    async fn count(&self, tenant_id: TenantId) -> DbResult<i64>;

    /// Insert within a caller-owned scope
    async fn create_in(
        &self,
        scope: &mut TenantScope,
        params: CreateEventParams,
        tenant_id: TenantId,
    ) -> DbResult<Event>;

    /// Fetch by id within a caller-owned scope
    async fn get_by_id_in(
        &self,
        scope: &mut TenantScope,
        id: Uuid,
        tenant_id: TenantId,
    ) -> DbResult<Event>;

    /// Partial update within a caller-owned scope
    async fn update_in(
        &self,
        scope: &mut TenantScope,
        params: UpdateEventParams,
        tenant_id: TenantId,
    ) -> DbResult<Event>;

    /// Delete within a caller-owned scope
    async fn delete_in(
        &self,
        scope: &mut TenantScope,
        id: Uuid,
        tenant_id: TenantId,
    ) -> DbResult<u64>;

    /// Insert many events in one transaction; empty input is a no-op success
    async fn create_batch(
        &self,
        params: Vec<CreateEventParams>,
        tenant_id: TenantId,
    ) -> DbResult<Vec<Event>>;

    /// Update many events in one transaction; empty input is a no-op success
    async fn update_batch(
        &self,
        params: Vec<UpdateEventParams>,
        tenant_id: TenantId,
    ) -> DbResult<Vec<Event>>;
}

/// Action persistence.
///
/// Actions carry no tenant column; isolation flows through the owning leak
/// row, so the tenant scope is still mandatory for every call.
#[async_trait]
pub trait ActionsRepository: Send + Sync {
    /// Insert a new action
    async fn create(&self, params: CreateActionParams, tenant_id: TenantId) -> DbResult<Action>;

    /// Fetch one action by id
    async fn get_by_id(&self, id: Uuid, tenant_id: TenantId) -> DbResult<Action>;

    /// Fetch actions with the default page bound
    async fn get_all(&self, tenant_id: TenantId) -> DbResult<Vec<Action>>;

    /// Count and page inside one scope
    async fn get_all_paginated(
        &self,
        tenant_id: TenantId,
        params: PaginationParams,
    ) -> DbResult<PaginatedResponse<Action>>;

    /// Apply the `Some` fields of `params` (status, result)
    async fn update(&self, params: UpdateActionParams, tenant_id: TenantId) -> DbResult<Action>;

    /// Delete one action; zero rows affected is promoted to `NotFound`
    async fn delete(&self, id: Uuid, tenant_id: TenantId) -> DbResult<u64>;

    /// Count the tenant's actions
    async fn count(&self, tenant_id: TenantId) -> DbResult<i64>;
}

/// User persistence, scoped to one tenant per call
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a new user
    async fn create(&self, params: CreateUserParams, tenant_id: TenantId) -> DbResult<User>;

    /// Fetch one user by id
    async fn get_by_id(&self, id: Uuid, tenant_id: TenantId) -> DbResult<User>;

    /// Fetch one user by email
    async fn get_by_email(&self, email: &str, tenant_id: TenantId) -> DbResult<User>;

    /// Fetch users with the default page bound
    async fn get_all(&self, tenant_id: TenantId) -> DbResult<Vec<User>>;

    /// Count and page inside one scope
    async fn get_all_paginated(
        &self,
        tenant_id: TenantId,
        params: PaginationParams,
    ) -> DbResult<PaginatedResponse<User>>;

    /// Apply the `Some` fields of `params`
    async fn update(&self, params: UpdateUserParams, tenant_id: TenantId) -> DbResult<User>;

    /// Delete one user; zero rows affected is promoted to `NotFound`
    async fn delete(&self, id: Uuid, tenant_id: TenantId) -> DbResult<u64>;

    /// Count the tenant's users
    async fn count(&self, tenant_id: TenantId) -> DbResult<i64>;
}

/// Liveness probing over the pool
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// One round trip to the storage engine
    async fn ping(&self) -> DbResult<()>;
}
