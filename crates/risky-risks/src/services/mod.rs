//! Services for the risk register.
//!
//! - [`RiskService`]: validates input, assigns ids and reads back what was stored
//! - [`RiskRepository`]: storage abstraction, with [`InMemoryRiskRepository`] as the default backend
//! - [`validation`]: field rules applied before anything reaches storage

pub mod repository;
pub mod risk;
pub mod validation;

pub use repository::{InMemoryRiskRepository, RiskRepository};
pub use risk::RiskService;
