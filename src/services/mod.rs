// ABOUTME: Thin domain services forwarding to the repository traits
// ABOUTME: Pure delegation, no invariant of its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

pub mod actions;
pub mod events;
pub mod health;
pub mod users;

pub use actions::ActionsService;
pub use events::EventsService;
pub use health::HealthService;
pub use users::UsersService;
