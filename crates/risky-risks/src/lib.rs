//! Risk register domain logic.
//!
//! This crate holds the data-access and validation pipeline behind the risk
//! register: the entity, the field rules applied to creation input, the
//! concurrency-safe repository and the service that orchestrates them.
//!
//! # Services
//!
//! The [`services`] module provides:
//! - [`services::RiskService`] - get, list and create operations
//! - [`services::RiskRepository`] - storage trait for pluggable backends
//! - [`services::InMemoryRiskRepository`] - process-lifetime `RwLock` store
//! - [`services::validation`] - declarative field rules and the engine that runs them
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use risky_risks::{CreateRiskInput, InMemoryRiskRepository, RiskService, RiskState};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = RiskService::new(Arc::new(InMemoryRiskRepository::new()));
//!
//! let risk = service
//!     .create(CreateRiskInput::new("open", "Leaky pipe", "Basement pipe drips"))
//!     .await
//!     .unwrap();
//!
//! assert_eq!(risk.state, RiskState::Open);
//! assert_eq!(service.get(risk.id.as_str()).await.unwrap(), risk);
//! # }
//! ```

pub mod services;
pub mod types;

pub use types::{CreateRiskInput, ParseRiskStateError, Risk, RiskState};

pub use services::{
    validation::{FieldRule, FieldRules, Validate},
    InMemoryRiskRepository, RiskRepository, RiskService,
};
