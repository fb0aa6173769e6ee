//! Test item API schemas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::{NewTestItem, TestItem};

/// Default page size for list endpoints
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Request body for creating a test item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestItemCreate {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(max = 1000))]
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl From<TestItemCreate> for NewTestItem {
    fn from(body: TestItemCreate) -> Self {
        Self {
            title: body.title,
            description: body.description,
            is_active: body.is_active,
        }
    }
}

/// Test item as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestItemResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<TestItem> for TestItemResponse {
    fn from(item: TestItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            is_active: item.is_active,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// `?skip=&limit=` query parameters
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
