//! Request and response models for the Risk API.

pub mod requests;
pub mod responses;

pub use requests::{CreateRiskRequest, ListRisksQuery, DEFAULT_LIMIT};
pub use responses::RiskResponse;
