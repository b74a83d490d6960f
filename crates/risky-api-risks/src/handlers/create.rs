//! Create risk endpoint handler.
//!
//! POST /risks - Create a new risk.

use crate::error::{ApiRisksError, ErrorResponse};
use crate::models::{CreateRiskRequest, RiskResponse};
use axum::{extract::rejection::JsonRejection, http::StatusCode, Extension, Json};
use risky_risks::RiskService;
use std::sync::Arc;

/// Creates a new risk and returns it as stored.
#[utoipa::path(
    post,
    path = "/risks",
    request_body = CreateRiskRequest,
    responses(
        (status = 201, description = "Risk created", body = RiskResponse),
        (status = 400, description = "Malformed body or validation error", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "Risks"
)]
pub async fn create_risk_handler(
    Extension(risk_service): Extension<Arc<RiskService>>,
    payload: Result<Json<CreateRiskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RiskResponse>), ApiRisksError> {
    let Json(request) = payload?;

    tracing::info!(state = %request.state, "Creating risk");

    let risk = risk_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(risk.into())))
}
