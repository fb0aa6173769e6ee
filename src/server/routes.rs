//! Application routing
//!
//! This module defines all HTTP routes for the application.

use anyhow::{Context, Result};
use axum::{
    http::{HeaderName, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::api::{health, test_items};
use crate::middleware::{log_request, REQUEST_ID_HEADER, TRACE_ID_HEADER};
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Result<Router> {
    let cors = create_cors_layer(&state.settings.backend_cors_origins)?;

    let test_routes = Router::new()
        .route(
            "/items",
            get(test_items::list_test_items).post(test_items::create_test_item),
        )
        .route(
            "/items/:item_id",
            get(test_items::get_test_item).delete(test_items::delete_test_item),
        )
        .route("/db-check", get(test_items::database_check));

    let router = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness))
        .nest("/api/v1/test", test_routes)
        // Layer order: last added = outermost = runs first
        .layer(cors)
        .layer(middleware::from_fn(log_request))
        .with_state(state);

    Ok(router)
}

/// Create the CORS layer for the configured origins
///
/// Credentials are allowed, so methods and headers mirror the preflight
/// request instead of using a wildcard.
fn create_cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([
            HeaderName::from_static(TRACE_ID_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ]))
}
