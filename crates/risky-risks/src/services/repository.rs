//! Risk storage trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use risky_core::{Result, RiskId, RiskyError};

use crate::types::Risk;

/// Trait for risk storage backends.
///
/// Implementations must be safe to share between concurrent requests
/// without any locking on the caller's side.
#[async_trait]
pub trait RiskRepository: Send + Sync {
    /// Get the risk stored under `id`.
    ///
    /// Fails with [`RiskyError::RecordNotFound`] when nothing is stored there.
    async fn get(&self, id: &str) -> Result<Risk>;

    /// Return the stored risks.
    ///
    /// `offset` and `limit` are accepted for forward compatibility but are
    /// not applied: every stored risk is returned, in unspecified order.
    async fn query(&self, offset: i64, limit: i64) -> Result<Vec<Risk>>;

    /// Store `risk` under its id, replacing any previous entry.
    async fn create(&self, risk: Risk) -> Result<()>;
}

/// Process-lifetime store backed by a `RwLock`-guarded map.
///
/// Concurrent writers to the same id resolve as last-writer-wins.
#[derive(Debug, Default)]
pub struct InMemoryRiskRepository {
    risks: RwLock<HashMap<RiskId, Risk>>,
}

impl InMemoryRiskRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            risks: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored risks.
    pub fn len(&self) -> usize {
        self.risks.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RiskRepository for InMemoryRiskRepository {
    async fn get(&self, id: &str) -> Result<Risk> {
        self.risks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
            .ok_or_else(|| RiskyError::not_found(id))
    }

    async fn query(&self, offset: i64, limit: i64) -> Result<Vec<Risk>> {
        // TODO: apply offset/limit once the list endpoint gains paging metadata.
        tracing::debug!(offset, limit, "Querying all risks; paging not applied");

        Ok(self
            .risks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect())
    }

    async fn create(&self, risk: Risk) -> Result<()> {
        self.risks
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(risk.id.clone(), risk);
        Ok(())
    }
}
