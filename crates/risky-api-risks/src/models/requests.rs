//! Request models for the Risk API.

use risky_risks::CreateRiskInput;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiRisksError;

/// Page size used when the request does not name one.
pub const DEFAULT_LIMIT: i64 = 100;

/// Request to create a new risk.
///
/// Missing fields are read as empty strings and rejected by validation as
/// blank, so a client sees every missing field at once.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateRiskRequest {
    /// One of `open`, `closed`, `accepted`, `investigating`.
    #[serde(default)]
    #[schema(example = "open")]
    pub state: String,

    /// Short title, at most 128 characters.
    #[serde(default)]
    #[schema(example = "Leaky pipe")]
    pub title: String,

    /// Free-form description, at most 1024 characters.
    #[serde(default)]
    #[schema(example = "The basement pipe drips onto the server rack.")]
    pub description: String,
}

impl From<CreateRiskRequest> for CreateRiskInput {
    fn from(request: CreateRiskRequest) -> Self {
        CreateRiskInput::new(request.state, request.title, request.description)
    }
}

/// Query parameters for listing risks.
///
/// Values arrive as raw strings so that a non-numeric value can be reported
/// with the exact text the client sent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRisksQuery {
    /// Number of risks to skip (default: 0). Accepted but not yet applied.
    #[serde(default)]
    #[param(value_type = Option<i64>)]
    pub offset: Option<String>,

    /// Maximum number of risks to return (default: 100). Accepted but not yet applied.
    #[serde(default)]
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
}

impl ListRisksQuery {
    /// The parsed offset, defaulting to 0.
    pub fn offset(&self) -> Result<i64, ApiRisksError> {
        parse_param("offset", self.offset.as_deref(), 0)
    }

    /// The parsed limit, defaulting to [`DEFAULT_LIMIT`].
    pub fn limit(&self) -> Result<i64, ApiRisksError> {
        parse_param("limit", self.limit.as_deref(), DEFAULT_LIMIT)
    }
}

/// An absent or empty value yields `default`.
fn parse_param(name: &str, raw: Option<&str>, default: i64) -> Result<i64, ApiRisksError> {
    match raw {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ApiRisksError::InvalidRequest(format!("invalid {name}: {value}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(offset: Option<&str>, limit: Option<&str>) -> ListRisksQuery {
        ListRisksQuery {
            offset: offset.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_list_risks_query_defaults() {
        let query = ListRisksQuery::default();
        assert_eq!(query.offset().unwrap(), 0);
        assert_eq!(query.limit().unwrap(), 100);
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let query = query(Some(""), Some(""));
        assert_eq!(query.offset().unwrap(), 0);
        assert_eq!(query.limit().unwrap(), 100);
    }

    #[test]
    fn test_explicit_values() {
        let query = query(Some("10"), Some("5"));
        assert_eq!(query.offset().unwrap(), 10);
        assert_eq!(query.limit().unwrap(), 5);
    }

    #[test]
    fn test_non_numeric_values_rejected() {
        let query = query(Some("a"), Some("b"));
        assert_eq!(query.offset().unwrap_err().to_string(), "invalid offset: a");
        assert_eq!(query.limit().unwrap_err().to_string(), "invalid limit: b");
    }

    #[test]
    fn test_negative_values_accepted() {
        let query = query(Some("-1"), Some("-5"));
        assert_eq!(query.offset().unwrap(), -1);
        assert_eq!(query.limit().unwrap(), -5);
    }

    #[test]
    fn test_fractional_value_rejected() {
        let err = query(None, Some("1.5")).limit().unwrap_err();
        assert_eq!(err.to_string(), "invalid limit: 1.5");
    }

    #[test]
    fn test_create_request_missing_fields() {
        let request: CreateRiskRequest = serde_json::from_str(r#"{"state":"open"}"#).unwrap();
        let input = CreateRiskInput::from(request);
        assert_eq!(input, CreateRiskInput::new("open", "", ""));
    }
}
