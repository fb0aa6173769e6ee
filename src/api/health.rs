//! Service info and health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the root endpoint
#[derive(Serialize)]
pub struct RootResponse {
    pub service: String,
    pub status: String,
    pub version: String,
    pub environment: String,
}

/// Response for the main health check endpoint
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub database: String,
    pub environment: String,
    pub uptime_seconds: u64,
}

/// Response for readiness probe
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

/// Individual readiness checks
#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub config_loaded: bool,
    pub database: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<bool>,
}

/// Service information
///
/// GET /
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        service: state.settings.app_name.clone(),
        status: "running".to_string(),
        version: state.settings.app_version.clone(),
        environment: state.settings.environment.to_string(),
    })
}

/// Main health check endpoint
///
/// Always answers 200; the `database` field carries the connectivity result.
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.repository.ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "auth_service".to_string(),
        database,
        environment: state.settings.environment.to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Readiness probe endpoint
///
/// Ready once configuration is loaded and the database answers. Storage is
/// reported but not required.
///
/// GET /ready
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let health = state.check_health().await;

    let checks = ReadinessChecks {
        config_loaded: true,
        database: health.database_healthy(),
        storage: health.storage,
    };
    let ready = checks.config_loaded && checks.database;

    if !ready {
        tracing::warn!(checks = ?checks, error = ?health.database.as_ref().err(), "Service not ready");
    } else if health.storage == Some(false) {
        tracing::debug!("Object storage is not reachable (non-critical)");
    }

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse { ready, checks }))
}
