//! Application state shared across all request handlers.

use risky_api_risks::RisksState;
use risky_risks::{InMemoryRiskRepository, RiskRepository, RiskService};
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across all handlers.
///
/// Cloned for each request; every field is cheap to clone.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Risk routes state
    pub risks: RisksState,

    /// Service startup time for uptime calculation
    pub startup_time: Instant,

    /// Service version reported by the health endpoint
    pub version: &'static str,
}

impl AppState {
    /// Create state over the given repository.
    pub fn new(repository: Arc<dyn RiskRepository>) -> Self {
        Self {
            risks: RisksState::new(Arc::new(RiskService::new(repository))),
            startup_time: Instant::now(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Create state backed by a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRiskRepository::new()))
    }

    /// Seconds since the state was created.
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.startup_time.elapsed().as_secs()
    }
}
