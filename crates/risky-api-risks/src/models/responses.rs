//! Response models for the Risk API.

use risky_risks::Risk;
use serde::Serialize;
use utoipa::ToSchema;

/// A risk as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RiskResponse {
    /// System-assigned identifier.
    #[schema(example = "0b3c2a4e-7d52-4d1c-9f0e-2f6a8b1c5d3e")]
    pub id: String,

    /// Lifecycle state.
    #[schema(example = "open")]
    pub state: String,

    /// Short title.
    pub title: String,

    /// Free-form description.
    pub description: String,
}

impl From<Risk> for RiskResponse {
    fn from(risk: Risk) -> Self {
        Self {
            id: risk.id.into_inner(),
            state: risk.state.to_string(),
            title: risk.title,
            description: risk.description,
        }
    }
}
