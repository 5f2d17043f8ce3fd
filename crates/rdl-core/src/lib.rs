// ABOUTME: Core domain types for the RDL revenue leak detection platform
// ABOUTME: Foundation crate with tenant ids, domain models, enums, and pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

#![deny(unsafe_code)]

//! # RDL Core
//!
//! Foundation crate providing the shared domain types for the RDL platform.
//! This crate is storage-agnostic by design: the database layer in the root
//! crate converts between these models and their PostgreSQL representations.
//!
//! ## Modules
//!
//! - **errors**: Typed conversion errors for enum and payload mapping
//! - **models**: Domain entities (`Event`, `Action`, `User`) and `TenantId`
//! - **pagination**: Offset pagination request/response types

/// Typed conversion errors shared by the enum and payload mappings
pub mod errors;

/// Core domain entities and their create/update parameter structs
pub mod models;

/// Offset pagination request/response types
pub mod pagination;
