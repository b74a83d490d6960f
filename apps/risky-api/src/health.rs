//! Health check endpoints.
//!
//! - `GET /healthcheck` - bare liveness probe, 200 with an empty body
//! - `GET /health` - status, version and uptime as JSON

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests.
    #[schema(example = "healthy")]
    pub status: String,
    /// Service version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
    /// Time the response was produced.
    pub timestamp: DateTime<Utc>,
}

/// Create health check routes.
pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/healthcheck",
    responses((status = 200, description = "Service is alive")),
    tag = "Health"
)]
pub async fn healthcheck_handler() -> StatusCode {
    StatusCode::OK
}

/// Service health with version and uptime.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now(),
    })
}
