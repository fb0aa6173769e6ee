//! Test item repository
//!
//! Data access layer for test item operations.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::db::models::{NewTestItem, TestItem};

/// Storage operations for test items
#[async_trait]
pub trait TestItemRepository: Send + Sync {
    /// Insert a new item and return it with its generated id and timestamps
    async fn create(&self, item: NewTestItem) -> Result<TestItem, RepositoryError>;

    /// List items ordered by id, skipping `skip` and returning at most `limit`
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<TestItem>, RepositoryError>;

    async fn get(&self, id: i64) -> Result<Option<TestItem>, RepositoryError>;

    /// Delete an item; returns false if it did not exist
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Verify connectivity to the backing store
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// Short name of the backing store, for logs
    fn backend(&self) -> &'static str;
}

/// Errors that can occur during repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Process-local repository, used when no database is available and in tests
#[derive(Default)]
pub struct InMemoryTestItemRepository {
    state: RwLock<InMemoryState>,
}

#[derive(Default)]
struct InMemoryState {
    last_id: i64,
    items: BTreeMap<i64, TestItem>,
}

impl InMemoryTestItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TestItemRepository for InMemoryTestItemRepository {
    async fn create(&self, item: NewTestItem) -> Result<TestItem, RepositoryError> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let item = TestItem {
            id: state.last_id,
            title: item.title,
            description: item.description,
            is_active: item.is_active,
            created_at: Utc::now(),
            updated_at: None,
        };
        state.items.insert(item.id, item.clone());

        Ok(item)
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<TestItem>, RepositoryError> {
        let state = self.state.read().await;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(state.items.values().skip(skip).take(limit).cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<TestItem>, RepositoryError> {
        Ok(self.state.read().await.items.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.state.write().await.items.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.state.read().await.items.len() as u64)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
