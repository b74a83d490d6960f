//! Risk service: the single entry point for reading and creating risks.

use std::sync::Arc;

use risky_core::{Result, RiskId, ValidationErrors};

use crate::services::repository::RiskRepository;
use crate::services::validation::{Validate, MSG_INVALID_VALUE};
use crate::types::{CreateRiskInput, Risk, RiskState};

/// Orchestrates validation and storage of risks.
///
/// Cheap to share: the repository sits behind an `Arc`, so a single service
/// can be cloned into every request handler.
#[derive(Clone)]
pub struct RiskService {
    repository: Arc<dyn RiskRepository>,
}

impl RiskService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn RiskRepository>) -> Self {
        Self { repository }
    }

    /// Get a risk by id.
    pub async fn get(&self, id: &str) -> Result<Risk> {
        self.repository.get(id).await
    }

    /// List stored risks.
    ///
    /// The paging window is passed through to the repository, which currently
    /// returns every risk regardless.
    pub async fn get_all(&self, offset: i64, limit: i64) -> Result<Vec<Risk>> {
        self.repository.query(offset, limit).await
    }

    /// Validate `input`, store it under a fresh id and return the stored risk.
    ///
    /// The returned value is read back from the repository rather than built
    /// locally, so it reflects exactly what was persisted.
    pub async fn create(&self, input: CreateRiskInput) -> Result<Risk> {
        input.validate()?;

        let state: RiskState = input
            .state
            .parse()
            .map_err(|_| ValidationErrors::single("state", MSG_INVALID_VALUE))?;

        let id = RiskId::generate();
        let risk = Risk {
            id: id.clone(),
            state,
            title: input.title,
            description: input.description,
        };

        self.repository.create(risk).await?;

        tracing::info!(risk_id = %id, state = %state, "Risk created");

        self.repository.get(id.as_str()).await
    }
}

impl std::fmt::Debug for RiskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskService").finish_non_exhaustive()
    }
}
