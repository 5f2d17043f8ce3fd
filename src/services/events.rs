// ABOUTME: Event service delegating 1:1 to the events repository
// ABOUTME: Exists so handlers depend on a service type, not storage directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use std::sync::Arc;

use rdl_core::models::{CreateEventParams, Event, TenantId, UpdateEventParams};
use rdl_core::pagination::{PaginatedResponse, PaginationParams};
use uuid::Uuid;

use crate::database::repositories::EventsRepository;
use crate::database::DbResult;

/// Event operations exposed to handlers
#[derive(Clone)]
pub struct EventsService {
    repo: Arc<dyn EventsRepository>,
}

impl EventsService {
    /// Build a service over `repo`
    #[must_use]
    pub fn new(repo: Arc<dyn EventsRepository>) -> Self {
        Self { repo }
    }

    /// Create an event for `tenant_id`.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn create(&self, params: CreateEventParams, tenant_id: TenantId) -> DbResult<Event> {
        self.repo.create(params, tenant_id).await
    }

    /// Fetch one event.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_by_id(&self, id: Uuid, tenant_id: TenantId) -> DbResult<Event> {
        self.repo.get_by_id(id, tenant_id).await
    }

    /// Fetch the tenant's events with the default bound.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_all(&self, tenant_id: TenantId) -> DbResult<Vec<Event>> {
        self.repo.get_all(tenant_id).await
    }

    /// Fetch one page of events with totals.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_all_paginated(
        &self,
        tenant_id: TenantId,
        params: PaginationParams,
    ) -> DbResult<PaginatedResponse<Event>> {
        self.repo.get_all_paginated(tenant_id, params).await
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn update(&self, params: UpdateEventParams, tenant_id: TenantId) -> DbResult<Event> {
        self.repo.update(params, tenant_id).await
    }

    /// Delete one event.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn delete(&self, id: Uuid, tenant_id: TenantId) -> DbResult<u64> {
        self.repo.delete(id, tenant_id).await
    }

    /// Count the tenant's events.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn count(&self, tenant_id: TenantId) -> DbResult<i64> {
        self.repo.count(tenant_id).await
    }

    /// Create many events atomically.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn create_batch(
        &self,
        params: Vec<CreateEventParams>,
        tenant_id: TenantId,
    ) -> DbResult<Vec<Event>> {
        self.repo.create_batch(params, tenant_id).await
    }

    /// Update many events atomically.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn update_batch(
        &self,
        params: Vec<UpdateEventParams>,
        tenant_id: TenantId,
    ) -> DbResult<Vec<Event>> {
        self.repo.update_batch(params, tenant_id).await
    }
}
