//! Domain types for the risk register.

use std::fmt;
use std::str::FromStr;

use risky_core::RiskId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Risk State
// ============================================================================

/// Lifecycle state of a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskState {
    /// Newly raised, nobody is working on it yet.
    Open,
    /// Resolved and no longer relevant.
    Closed,
    /// Acknowledged and deliberately tolerated.
    Accepted,
    /// Under active analysis.
    Investigating,
}

impl RiskState {
    /// Every state, in declaration order.
    pub const ALL: [RiskState; 4] = [
        Self::Open,
        Self::Closed,
        Self::Accepted,
        Self::Investigating,
    ];

    /// Wire names of every state, in declaration order.
    pub const NAMES: [&'static str; 4] = ["open", "closed", "accepted", "investigating"];

    /// The wire name of this state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Accepted => "accepted",
            Self::Investigating => "investigating",
        }
    }
}

impl fmt::Display for RiskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`RiskState`] wire names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk state: {0}")]
pub struct ParseRiskStateError(pub String);

impl FromStr for RiskState {
    type Err = ParseRiskStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseRiskStateError(s.to_string()))
    }
}

// ============================================================================
// Risk
// ============================================================================

/// A tracked risk.
///
/// Created exactly once through [`crate::RiskService::create`]; there is no
/// update or delete. The repository owns stored values and hands out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    /// System-assigned identifier, immutable after creation.
    pub id: RiskId,
    /// Lifecycle state.
    pub state: RiskState,
    /// Short title, at most 128 characters.
    pub title: String,
    /// Free-form description, at most 1024 characters.
    pub description: String,
}

// ============================================================================
// Input
// ============================================================================

/// Raw input for creating a risk.
///
/// Fields are unvalidated strings; missing JSON fields deserialize as empty
/// so that the validator reports them as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRiskInput {
    /// Requested state, one of [`RiskState::NAMES`].
    #[serde(default)]
    pub state: String,
    /// Requested title.
    #[serde(default)]
    pub title: String,
    /// Requested description.
    #[serde(default)]
    pub description: String,
}

impl CreateRiskInput {
    /// Create an input from its three fields.
    pub fn new(
        state: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trips_through_str() {
        for state in RiskState::ALL {
            assert_eq!(state.as_str().parse::<RiskState>(), Ok(state));
        }
    }

    #[test]
    fn test_names_match_states() {
        let names: Vec<&str> = RiskState::ALL.iter().map(RiskState::as_str).collect();
        assert_eq!(names, RiskState::NAMES);
    }

    #[test]
    fn test_parse_unknown_state_fails() {
        let err = "open1".parse::<RiskState>().unwrap_err();
        assert_eq!(err.to_string(), "unknown risk state: open1");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Open".parse::<RiskState>().is_err());
    }

    #[test]
    fn test_risk_serializes_with_stable_field_names() {
        let risk = Risk {
            id: RiskId::from("2"),
            state: RiskState::Investigating,
            title: "t".to_string(),
            description: "d".to_string(),
        };

        let json = serde_json::to_string(&risk).unwrap();
        assert_eq!(
            json,
            r#"{"id":"2","state":"investigating","title":"t","description":"d"}"#
        );
    }

    #[test]
    fn test_input_missing_fields_default_to_empty() {
        let input: CreateRiskInput = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(input, CreateRiskInput::new("", "t", ""));
    }
}
