//! risky Core Library
//!
//! Shared types for the risk register service.
//!
//! # Modules
//!
//! - [`ids`] - Opaque risk identifiers (`RiskId`)
//! - [`error`] - Standardized error types (`RiskyError`, `ValidationErrors`)
//!
//! # Example
//!
//! ```
//! use risky_core::{Result, RiskId, RiskyError};
//!
//! let id = RiskId::generate();
//!
//! fn lookup(id: &RiskId) -> Result<()> {
//!     Err(RiskyError::not_found(id.as_str()))
//! }
//!
//! assert!(lookup(&id).is_err());
//! ```

pub mod error;
pub mod ids;

pub use error::{FieldError, Result, RiskyError, ValidationErrors};
pub use ids::RiskId;
