//! Test item endpoints
//!
//! CRUD endpoints used to verify database connectivity and request
//! validation end to end.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use validator::Validate;

use crate::error::ApiError;
use crate::schemas::{Pagination, TestItemCreate, TestItemResponse};
use crate::server::state::AppState;

/// Response for the database check endpoint
#[derive(Debug, Serialize)]
pub struct DbCheckResponse {
    pub status: String,
    pub message: String,
    pub test_items_count: u64,
}

/// POST /api/v1/test/items
///
/// Extractor rejections are taken as values so they render as `{"detail"}`
/// like every other error.
pub async fn create_test_item(
    State(state): State<AppState>,
    body: Result<Json<TestItemCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<TestItemResponse>), ApiError> {
    let Json(body) = body?;
    body.validate()?;

    let item = state.repository.create(body.into()).await?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// GET /api/v1/test/items?skip=&limit=
pub async fn list_test_items(
    State(state): State<AppState>,
    page: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<TestItemResponse>>, ApiError> {
    let Query(page) = page?;
    let items = state.repository.list(page.skip, page.limit).await?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/test/items/:item_id
pub async fn get_test_item(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TestItemResponse>, ApiError> {
    let Path(item_id) = item_id?;
    state
        .repository
        .get(item_id)
        .await?
        .map(|item| Json(item.into()))
        .ok_or_else(|| not_found(item_id))
}

/// DELETE /api/v1/test/items/:item_id
pub async fn delete_test_item(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(item_id) = item_id?;
    if state.repository.delete(item_id).await? {
        tracing::debug!(item_id, "Deleted test item");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(item_id))
    }
}

/// Quick database connectivity check returning the number of test items
///
/// GET /api/v1/test/db-check
pub async fn database_check(
    State(state): State<AppState>,
) -> Result<Json<DbCheckResponse>, ApiError> {
    let count = state.repository.count().await?;

    Ok(Json(DbCheckResponse {
        status: "success".to_string(),
        message: "Database connection successful".to_string(),
        test_items_count: count,
    }))
}

fn not_found(item_id: i64) -> ApiError {
    ApiError::NotFound(format!("Test item with id {} not found", item_id))
}
