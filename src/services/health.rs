// ABOUTME: Health service delegating to the health repository
// ABOUTME: Readiness comes down to one storage round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use std::sync::Arc;

use crate::database::repositories::HealthRepository;
use crate::database::DbResult;

/// Liveness/readiness checks exposed to handlers
#[derive(Clone)]
pub struct HealthService {
    repo: Arc<dyn HealthRepository>,
}

impl HealthService {
    /// Build a service over `repo`
    #[must_use]
    pub fn new(repo: Arc<dyn HealthRepository>) -> Self {
        Self { repo }
    }

    /// Whether the storage backend is reachable.
    ///
    /// # Errors
    ///
    /// Passes the repository error through unchanged.
    pub async fn check(&self) -> DbResult<()> {
        self.repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseError;
    use async_trait::async_trait;

    struct FlakyRepo {
        healthy: bool,
    }

    #[async_trait]
    impl HealthRepository for FlakyRepo {
        async fn ping(&self) -> DbResult<()> {
            if self.healthy {
                Ok(())
            } else {
                Err(DatabaseError::ConnectionFailure)
            }
        }
    }

    #[tokio::test]
    async fn test_check_reports_healthy_backend() {
        let service = HealthService::new(Arc::new(FlakyRepo { healthy: true }));
        assert!(service.check().await.is_ok());
    }

    #[tokio::test]
    async fn test_check_reports_unreachable_backend() {
        let service = HealthService::new(Arc::new(FlakyRepo { healthy: false }));
        assert!(matches!(
            service.check().await,
            Err(DatabaseError::ConnectionFailure)
        ));
    }
}
