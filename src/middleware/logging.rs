//! Request logging middleware
//!
//! Logs every HTTP request with its duration and status, and tags it with a
//! trace id that is echoed back to the client.

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Header name for trace ID
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Header name for request ID (alias for trace ID)
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Trace ID attached to request logs and response headers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceId(pub String);

impl TraceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Middleware to log HTTP requests and responses
///
/// Reuses an incoming `x-trace-id` or `x-request-id` header when present,
/// otherwise generates one. The id tags the request span and is echoed in
/// both response headers.
pub async fn log_request(request: Request, next: Next) -> Response<Body> {
    let start = Instant::now();
    let trace_id = extract_or_generate_trace_id(&request);

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    tracing::debug!(
        trace_id = %trace_id,
        method = %method,
        path = %path,
        user_agent = %user_agent,
        "Incoming request"
    );

    let span = tracing::info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %method,
        path = %path,
    );
    let mut response = next.run(request).instrument(span).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if status.is_server_error() {
        tracing::error!(
            trace_id = %trace_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            trace_id = %trace_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Client error"
        );
    } else {
        tracing::info!(
            trace_id = %trace_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
        response.headers_mut().insert(TRACE_ID_HEADER, value.clone());
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Extract trace ID from request headers or generate a new one
fn extract_or_generate_trace_id(request: &Request) -> TraceId {
    [TRACE_ID_HEADER, REQUEST_ID_HEADER]
        .iter()
        .find_map(|name| {
            request
                .headers()
                .get(*name)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
        })
        .map(|id| TraceId(id.to_string()))
        .unwrap_or_default()
}
