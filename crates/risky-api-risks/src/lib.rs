//! HTTP API for the risk register.
//!
//! Exposes [`risks_router`], an axum router serving `/risks` and
//! `/risks/:id` on top of a shared [`risky_risks::RiskService`]. Domain
//! errors are rendered as JSON by [`ApiRisksError`].

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;

pub use error::{ApiRisksError, ErrorResponse, FieldErrorResponse};
pub use models::{CreateRiskRequest, ListRisksQuery, RiskResponse};
pub use router::{risks_router, RisksState};
