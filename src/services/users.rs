// ABOUTME: User service delegating 1:1 to the users repository
// ABOUTME: Exists so handlers depend on a service type, not storage directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use std::sync::Arc;

use rdl_core::models::{CreateUserParams, TenantId, UpdateUserParams, User};
use rdl_core::pagination::{PaginatedResponse, PaginationParams};
use uuid::Uuid;

use crate::database::repositories::UsersRepository;
use crate::database::DbResult;

/// User operations exposed to handlers
#[derive(Clone)]
pub struct UsersService {
    repo: Arc<dyn UsersRepository>,
}

impl UsersService {
    /// Build a service over `repo`
    #[must_use]
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    /// Create a user for `tenant_id`.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn create(&self, params: CreateUserParams, tenant_id: TenantId) -> DbResult<User> {
        self.repo.create(params, tenant_id).await
    }

    /// Fetch one user by id.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_by_id(&self, id: Uuid, tenant_id: TenantId) -> DbResult<User> {
        self.repo.get_by_id(id, tenant_id).await
    }

    /// Fetch one user by email.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_by_email(&self, email: &str, tenant_id: TenantId) -> DbResult<User> {
        self.repo.get_by_email(email, tenant_id).await
    }

    /// Fetch the tenant's users with the default bound.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_all(&self, tenant_id: TenantId) -> DbResult<Vec<User>> {
        self.repo.get_all(tenant_id).await
    }

    /// Fetch one page of users with totals.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn get_all_paginated(
        &self,
        tenant_id: TenantId,
        params: PaginationParams,
    ) -> DbResult<PaginatedResponse<User>> {
        self.repo.get_all_paginated(tenant_id, params).await
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn update(&self, params: UpdateUserParams, tenant_id: TenantId) -> DbResult<User> {
        self.repo.update(params, tenant_id).await
    }

    /// Delete one user.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn delete(&self, id: Uuid, tenant_id: TenantId) -> DbResult<u64> {
        self.repo.delete(id, tenant_id).await
    }

    /// Count the tenant's users.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn count(&self, tenant_id: TenantId) -> DbResult<i64> {
        self.repo.count(tenant_id).await
    }
}
