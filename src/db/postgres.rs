//! PostgreSQL repository
//!
//! sqlx-backed [`TestItemRepository`]. The pool connects lazily, so building
//! it never blocks startup; the first query establishes the connection.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::db::models::{NewTestItem, TestItem};
use crate::db::repositories::{RepositoryError, TestItemRepository};

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Schema statements, applied in order; each is idempotent
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        email VARCHAR NOT NULL,
        full_name VARCHAR,
        profile_picture VARCHAR,
        google_id VARCHAR,
        oauth_provider VARCHAR,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        is_verified BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ,
        last_login TIMESTAMPTZ
    )",
    "CREATE UNIQUE INDEX IF NOT EXISTS ix_users_email ON users (email)",
    "CREATE UNIQUE INDEX IF NOT EXISTS ix_users_google_id ON users (google_id)",
    "CREATE TABLE IF NOT EXISTS test_items (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        description VARCHAR(1000),
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ
    )",
    "CREATE INDEX IF NOT EXISTS ix_test_items_title ON test_items (title)",
];

const TEST_ITEM_COLUMNS: &str = "id, title, description, is_active, created_at, updated_at";

/// Repository for test items stored in PostgreSQL
#[derive(Clone)]
pub struct PgTestItemRepository {
    pool: PgPool,
}

impl PgTestItemRepository {
    /// Create a repository with a lazily connected pool
    pub fn connect_lazy(database_url: &str) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Create the tables used by the service if they do not exist
    pub async fn init_schema(&self) -> Result<(), RepositoryError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl TestItemRepository for PgTestItemRepository {
    async fn create(&self, item: NewTestItem) -> Result<TestItem, RepositoryError> {
        let query = format!(
            "INSERT INTO test_items (title, description, is_active) VALUES ($1, $2, $3) RETURNING {}",
            TEST_ITEM_COLUMNS
        );

        let created = sqlx::query_as::<_, TestItem>(&query)
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.is_active)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(id = created.id, title = %created.title, "Created test item");

        Ok(created)
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<TestItem>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM test_items ORDER BY id OFFSET $1 LIMIT $2",
            TEST_ITEM_COLUMNS
        );

        let items = sqlx::query_as::<_, TestItem>(&query)
            .bind(i64::try_from(skip).unwrap_or(i64::MAX))
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn get(&self, id: i64) -> Result<Option<TestItem>, RepositoryError> {
        let query = format!("SELECT {} FROM test_items WHERE id = $1", TEST_ITEM_COLUMNS);

        let item = sqlx::query_as::<_, TestItem>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM test_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM test_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lazy_pool_does_not_connect() {
        let repo = PgTestItemRepository::connect_lazy("postgresql://u:p@127.0.0.1:1/db").unwrap();
        assert_eq!(repo.backend(), "postgres");
    }

    #[test]
    fn test_schema_creates_tables_before_indexes() {
        let position = |needle: &str| {
            SCHEMA
                .iter()
                .position(|statement| statement.contains(needle))
                .unwrap()
        };

        assert!(position("CREATE TABLE IF NOT EXISTS users") < position("ix_users_email"));
        assert!(position("CREATE TABLE IF NOT EXISTS test_items") < position("ix_test_items_title"));
        assert!(SCHEMA
            .iter()
            .any(|s| s.contains("UNIQUE INDEX IF NOT EXISTS ix_users_google_id")));
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        assert!(PgTestItemRepository::connect_lazy("not a url").is_err());
    }
}
