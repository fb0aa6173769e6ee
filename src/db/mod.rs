//! Database module
//!
//! Contains the data models, the repository seam, and the session provider
//! that picks a repository implementation at startup.

pub mod models;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod repositories;

pub use models::{NewTestItem, TestItem, User};
#[cfg(feature = "postgres")]
pub use postgres::PgTestItemRepository;
pub use repositories::{InMemoryTestItemRepository, RepositoryError, TestItemRepository};

use anyhow::Result;
use std::sync::Arc;

use crate::config::Settings;

/// Open the database and create missing tables
#[cfg(feature = "postgres")]
pub async fn connect(settings: &Settings) -> Result<Arc<dyn TestItemRepository>> {
    use anyhow::Context;

    let repository = PgTestItemRepository::connect_lazy(settings.database_connection_string())
        .context("Invalid DATABASE_URL")?;

    tracing::info!("Initializing database");
    repository
        .init_schema()
        .await
        .context("Failed to initialize database schema")?;
    tracing::info!("Database initialized successfully");

    Ok(Arc::new(repository))
}

/// Without the `postgres` feature the service keeps test items in memory
#[cfg(not(feature = "postgres"))]
pub async fn connect(_settings: &Settings) -> Result<Arc<dyn TestItemRepository>> {
    tracing::warn!("Built without the postgres feature; test items are kept in memory");
    Ok(Arc::new(InMemoryTestItemRepository::new()))
}
