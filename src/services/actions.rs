// ABOUTME: Action service delegating 1:1 to the actions repository
// ABOUTME: Exists so handlers depend on a service type, not storage directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use std::sync::Arc;

use rdl_core::models::{Action, CreateActionParams, TenantId, UpdateActionParams};
use rdl_core::pagination::{PaginatedResponse, PaginationParams};
use uuid::Uuid;

use crate::database::repositories::ActionsRepository;
use crate::database::DbResult;

/// Action operations exposed to handlers
#[derive(Clone)]
pub struct ActionsService {
    repo: Arc<dyn ActionsRepository>,
}

impl ActionsService {
    /// Build a service over `repo`
    #[must_use]
    pub fn new(repo: Arc<dyn ActionsRepository>) -> Self {
        Self { repo }
    }

    /// Create an action for `tenant_id`.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn create(
        &self,
        params: CreateActionParams,
        tenant_id: TenantId,
    ) -> DbResult<Action> {
        self.repo.create(params, tenant_id).await
    }

    /// Fetch one action.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_by_id(&self, id: Uuid, tenant_id: TenantId) -> DbResult<Action> {
        self.repo.get_by_id(id, tenant_id).await
    }

    /// Fetch the tenant's actions with the default bound.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_all(&self, tenant_id: TenantId) -> DbResult<Vec<Action>> {
        self.repo.get_all(tenant_id).await
    }

    /// Fetch one page of actions with totals.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_all_paginated(
        &self,
        tenant_id: TenantId,
        params: PaginationParams,
    ) -> DbResult<PaginatedResponse<Action>> {
        self.repo.get_all_paginated(tenant_id, params).await
    }

    /// Apply a status/result update.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn update(
        &self,
        params: UpdateActionParams,
        tenant_id: TenantId,
    ) -> DbResult<Action> {
        self.repo.update(params, tenant_id).await
    }

    /// Delete one action.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn delete(&self, id: Uuid, tenant_id: TenantId) -> DbResult<u64> {
        self.repo.delete(id, tenant_id).await
    }

    /// Count the tenant's actions.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn count(&self, tenant_id: TenantId) -> DbResult<i64> {
        self.repo.count(tenant_id).await
    }
}
