// ABOUTME: User domain model for tenant-scoped identity records
// ABOUTME: User struct plus create/update parameter structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TenantId;

/// Tenant-scoped identity record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Email address, unique per tenant
    pub email: String,
    /// Display name
    pub name: String,
    /// Identifier in the tenant's upstream identity provider
    pub external_id: String,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last updated
    pub updated_at: DateTime<Utc>,
}

/// Parameters for creating a user
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Email address, unique per tenant
    pub email: String,
    /// Display name
    pub name: String,
    /// Identifier in the tenant's upstream identity provider
    pub external_id: String,
}

/// Parameters for a partial user update
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    /// User to update
    pub id: Uuid,
    /// New email, if changing
    pub email: Option<String>,
    /// New display name, if changing
    pub name: Option<String>,
    /// New external identifier, if changing
    pub external_id: Option<String>,
}
