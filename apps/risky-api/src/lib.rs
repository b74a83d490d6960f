//! risky API service.
//!
//! Wires configuration, logging and the risk routes into a single axum
//! application. The binary in `main.rs` only parses arguments, calls into
//! this crate and serves the router until a shutdown signal arrives.

pub mod app;
pub mod config;
pub mod health;
pub mod logging;
pub mod openapi;
pub mod state;

pub use app::build_router;
pub use config::{AppConfig, ConfigError};
pub use state::AppState;
