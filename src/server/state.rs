//! Application state container
//!
//! This module defines the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{create_s3_client, Settings};
use crate::db::{self, TestItemRepository};
use crate::services::StorageService;

/// Shared application state
///
/// Cheap to clone; settings are immutable and shared without locking.
#[derive(Clone)]
pub struct AppState {
    /// Resolved settings
    pub settings: Arc<Settings>,

    /// Test item storage
    pub repository: Arc<dyn TestItemRepository>,

    /// Object storage, absent when the service runs without cloud access
    pub storage: Option<Arc<StorageService>>,

    /// Application start time (for uptime calculation)
    pub start_time: Instant,
}

impl AppState {
    /// Create the application state, opening the database and cloud clients
    pub async fn new(settings: Arc<Settings>) -> anyhow::Result<Self> {
        tracing::debug!(
            region = %settings.aws.region,
            local_emulation = settings.is_local_emulation(),
            endpoint = ?settings.aws_endpoint_override(),
            "Initializing AWS SDK clients"
        );
        let s3 = create_s3_client(&settings).await;
        let storage = Arc::new(StorageService::new(&settings, s3));
        tracing::info!(bucket = storage.bucket(), "Object storage client ready");

        let repository = db::connect(&settings).await?;
        tracing::info!(backend = repository.backend(), "Database session provider ready");

        Ok(Self::from_parts(settings, repository, Some(storage)))
    }

    /// Assemble state from already constructed collaborators
    pub fn from_parts(
        settings: Arc<Settings>,
        repository: Arc<dyn TestItemRepository>,
        storage: Option<Arc<StorageService>>,
    ) -> Self {
        Self {
            settings,
            repository,
            storage,
            start_time: Instant::now(),
        }
    }

    /// Get the application uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Check the database and object storage
    pub async fn check_health(&self) -> HealthStatus {
        let database = self.repository.ping().await.map_err(|e| e.to_string());

        let storage = match &self.storage {
            Some(storage) => Some(storage.health_check().await),
            None => None,
        };

        HealthStatus { database, storage }
    }
}

/// Health of the service's dependencies
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub database: Result<(), String>,
    /// `None` when no storage client is configured
    pub storage: Option<bool>,
}

impl HealthStatus {
    pub fn database_healthy(&self) -> bool {
        self.database.is_ok()
    }
}
