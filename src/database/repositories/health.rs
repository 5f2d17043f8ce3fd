// ABOUTME: Health repository probing storage liveness through a Pinger seam
// ABOUTME: The seam exists so service tests can run without a live server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use async_trait::async_trait;

use super::super::errors::DbResult;
use super::super::Database;
use super::HealthRepository;

/// Anything that can answer a liveness round trip
#[async_trait]
pub trait Pinger: Send + Sync {
    /// One round trip; `Ok` means the backend is reachable
    async fn ping(&self) -> DbResult<()>;
}

#[async_trait]
impl Pinger for Database {
    async fn ping(&self) -> DbResult<()> {
        Self::ping(self).await
    }
}

/// Health repository over any [`Pinger`]
pub struct PgHealthRepository<P: Pinger> {
    pinger: P,
}

impl<P: Pinger> PgHealthRepository<P> {
    /// Build a repository over `pinger`
    #[must_use]
    pub const fn new(pinger: P) -> Self {
        Self { pinger }
    }
}

#[async_trait]
impl<P: Pinger> HealthRepository for PgHealthRepository<P> {
    async fn ping(&self) -> DbResult<()> {
        self.pinger.ping().await
    }
}
