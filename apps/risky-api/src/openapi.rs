//! `OpenAPI` documentation.
//!
//! The document is generated by utoipa and served as JSON at
//! `/api-doc/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::{Modify, OpenApi};

use crate::health::HealthResponse;
use risky_api_risks::{CreateRiskRequest, ErrorResponse, FieldErrorResponse, RiskResponse};

/// Prefix under which the risk routes are mounted.
pub const API_PREFIX: &str = "/api/v1";

/// Rewrites risk paths to include [`API_PREFIX`].
struct ApiPrefixAddon;

impl Modify for ApiPrefixAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let paths = std::mem::take(&mut openapi.paths.paths);
        openapi.paths.paths = paths
            .into_iter()
            .map(|(path, item)| {
                if path.starts_with("/risks") {
                    (format!("{API_PREFIX}{path}"), item)
                } else {
                    (path, item)
                }
            })
            .collect();
    }
}

/// `OpenAPI` documentation for the risk register.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "risky API",
        description = "Risk register service"
    ),
    paths(
        crate::health::healthcheck_handler,
        crate::health::health_handler,
        risky_api_risks::handlers::get::get_risk_handler,
        risky_api_risks::handlers::list::list_risks_handler,
        risky_api_risks::handlers::create::create_risk_handler,
    ),
    components(schemas(
        HealthResponse,
        RiskResponse,
        CreateRiskRequest,
        ErrorResponse,
        FieldErrorResponse,
    )),
    modifiers(&ApiPrefixAddon),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "Risks", description = "Risk register"),
    )
)]
pub struct ApiDoc;

/// Serve the `OpenAPI` document.
pub fn openapi_routes() -> Router {
    Router::new().route("/api-doc/openapi.json", get(openapi_handler))
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
