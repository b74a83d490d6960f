//! Router assembly.

use axum::Router;
use risky_api_risks::risks_router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::health::health_routes;
use crate::openapi::{openapi_routes, API_PREFIX};
use crate::state::AppState;

/// Build the full application router.
///
/// Risk routes live under `/api/v1`; health and documentation routes are
/// mounted at the root.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes(state.clone()))
        .merge(openapi_routes())
        .nest(API_PREFIX, risks_router(state.risks))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
