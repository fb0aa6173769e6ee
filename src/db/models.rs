//! Database models
//!
//! Row types for the `users` and `test_items` tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Test item used to verify database connectivity and CRUD operations.
///
/// Stored in the `test_items` table with `id` as primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct TestItem {
    pub id: i64,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub is_active: bool,

    /// Set by the database on insert
    pub created_at: DateTime<Utc>,

    /// Set on update; `None` until the row is first modified
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Values for inserting a new test item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestItem {
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// User account, for password-less (OAuth) and traditional sign-in.
///
/// Stored in the `users` table; `email` and `google_id` are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,

    pub email: String,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub profile_picture: Option<String>,

    /// Google account subject id, when the user signed in with Google
    #[serde(default)]
    pub google_id: Option<String>,

    /// e.g. `google`
    #[serde(default)]
    pub oauth_provider: Option<String>,

    pub is_active: bool,

    pub is_verified: bool,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_optional_columns_default_to_none() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "email": "ada@example.com",
            "is_active": true,
            "is_verified": false,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.google_id, None);
        assert_eq!(user.oauth_provider, None);
        assert_eq!(user.last_login, None);
        assert!(!user.is_verified);
    }

    #[test]
    fn test_test_item_serializes_timestamps_as_rfc3339() {
        let item = TestItem {
            id: 3,
            title: "first".to_string(),
            description: None,
            is_active: true,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            updated_at: None,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["created_at"], "2024-01-01T00:00:00Z");
        assert!(value["updated_at"].is_null());
    }
}
