//! Risk Identifiers
//!
//! Risks are keyed by an opaque string identifier assigned by the system at
//! creation time. Freshly generated identifiers are UUID v4 strings, which
//! keeps the collision probability negligible without any coordination.
//!
//! Callers must not rely on the format: lookups accept any string, and an
//! identifier that was never issued simply does not resolve.
//!
//! # Example
//!
//! ```
//! use risky_core::RiskId;
//!
//! let id = RiskId::generate();
//! assert!(!id.as_str().is_empty());
//!
//! let parsed = RiskId::from("risk-42");
//! assert_eq!(parsed.as_str(), "risk-42");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identifier of a stored risk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskId(String);

impl RiskId {
    /// Generates a new random identifier (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for RiskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RiskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RiskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for RiskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `RiskId` be queried with a plain `&str`.
impl Borrow<str> for RiskId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
