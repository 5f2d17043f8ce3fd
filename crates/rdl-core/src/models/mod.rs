// ABOUTME: Core domain entities for the RDL platform
// ABOUTME: Re-exports TenantId, Event, Action, User and their param structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

//! # Data Models
//!
//! Domain-level representations of the entities persisted by the data
//! access layer. These structs are independent of any storage
//! representation: nullable columns become `Option`, enums become closed
//! Rust enums, and opaque JSON payloads become `serde_json::Value`.

mod action;
mod event;
mod tenant;
mod user;

pub use action::{Action, ActionResult, ActionStatus, ActionType, CreateActionParams, UpdateActionParams};
pub use event::{CreateEventParams, Event, EventPayload, EventStatus, EventType, UpdateEventParams};
pub use tenant::{Tenant, TenantId};
pub use user::{CreateUserParams, UpdateUserParams, User};
