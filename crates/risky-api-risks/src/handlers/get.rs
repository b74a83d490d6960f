//! Get risk endpoint handler.
//!
//! GET /risks/:id - Fetch a single risk.

use crate::error::{ApiRisksError, ErrorResponse};
use crate::models::RiskResponse;
use axum::{extract::Path, Extension, Json};
use risky_risks::RiskService;
use std::sync::Arc;

/// Returns the risk stored under `id`.
#[utoipa::path(
    get,
    path = "/risks/{id}",
    params(
        ("id" = String, Path, description = "Risk ID")
    ),
    responses(
        (status = 200, description = "Risk found", body = RiskResponse),
        (status = 404, description = "Risk not found", body = ErrorResponse),
    ),
    tag = "Risks"
)]
pub async fn get_risk_handler(
    Extension(risk_service): Extension<Arc<RiskService>>,
    Path(id): Path<String>,
) -> Result<Json<RiskResponse>, ApiRisksError> {
    tracing::debug!(risk_id = %id, "Getting risk");

    let risk = risk_service.get(&id).await?;

    Ok(Json(risk.into()))
}
