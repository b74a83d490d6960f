//! Risk API router configuration.
//!
//! Configures routes for the risk register:
//! - GET /risks - List risks
//! - POST /risks - Create a new risk
//! - GET /risks/:id - Get risk details

use crate::handlers::{create_risk_handler, get_risk_handler, list_risks_handler};
use axum::{routing::get, Extension, Router};
use risky_risks::{InMemoryRiskRepository, RiskService};
use std::sync::Arc;

/// Application state for risk routes.
#[derive(Clone, Debug)]
pub struct RisksState {
    /// Risk service for get, list and create.
    pub risk_service: Arc<RiskService>,
}

impl RisksState {
    /// Create a risks state around an existing service.
    pub fn new(risk_service: Arc<RiskService>) -> Self {
        Self { risk_service }
    }

    /// Create a risks state backed by a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(RiskService::new(Arc::new(
            InMemoryRiskRepository::new(),
        ))))
    }
}

/// Create the risk router.
///
/// # Endpoints
///
/// - `GET /risks` - List risks (`offset`, `limit` accepted)
/// - `POST /risks` - Create a risk, 201 on success
/// - `GET /risks/:id` - Get a risk, 404 when unknown
pub fn risks_router(state: RisksState) -> Router {
    Router::new()
        .route("/risks", get(list_risks_handler).post(create_risk_handler))
        .route("/risks/:id", get(get_risk_handler))
        .layer(Extension(state.risk_service))
}
