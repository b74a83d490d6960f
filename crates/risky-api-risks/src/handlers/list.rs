//! List risks endpoint handler.
//!
//! GET /risks - List every stored risk.

use crate::error::{ApiRisksError, ErrorResponse};
use crate::models::{ListRisksQuery, RiskResponse};
use axum::{extract::Query, Extension, Json};
use risky_risks::RiskService;
use std::sync::Arc;

/// Lists stored risks.
///
/// `offset` and `limit` are validated and logged but do not narrow the
/// result yet: every risk is returned, in no particular order.
#[utoipa::path(
    get,
    path = "/risks",
    params(ListRisksQuery),
    responses(
        (status = 200, description = "List of risks", body = Vec<RiskResponse>),
        (status = 400, description = "Invalid offset or limit", body = ErrorResponse),
    ),
    tag = "Risks"
)]
pub async fn list_risks_handler(
    Extension(risk_service): Extension<Arc<RiskService>>,
    Query(query): Query<ListRisksQuery>,
) -> Result<Json<Vec<RiskResponse>>, ApiRisksError> {
    let offset = query.offset()?;
    let limit = query.limit()?;

    tracing::info!(offset, limit, "Listing risks");

    let risks = risk_service.get_all(offset, limit).await?;

    Ok(Json(risks.into_iter().map(RiskResponse::from).collect()))
}
