use serde::Serialize;
use tracing::{debug, warn};

use fwms_domain::FoodLedger;

use crate::AppState;

/// How a mutation ended up stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Durability {
    /// Written to the snapshot store.
    Persisted,
    /// Running without a snapshot store; lost on restart.
    MemoryOnly,
    /// The snapshot write failed; the change lives in memory only.
    Degraded,
}

impl Durability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Durability::Persisted => "persisted",
            Durability::MemoryOnly => "memory_only",
            Durability::Degraded => "degraded",
        }
    }
}

/// A mutation result together with its durability.
#[derive(Debug, Clone, Serialize)]
pub struct Written<T> {
    pub data: T,
    pub durability: Durability,
}

impl<T> Written<T> {
    pub fn new(data: T, durability: Durability) -> Self {
        Self { data, durability }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Written<U> {
        Written::new(f(self.data), self.durability)
    }
}

/// Writes the current ledger to the snapshot store. Must be called while the
/// caller still holds the ledger write lock so snapshots follow mutation order.
pub async fn persist(state: &AppState, ledger: &FoodLedger) -> Durability {
    if !state.snapshot_repo.is_durable() {
        return Durability::MemoryOnly;
    }
    match state.snapshot_repo.save(ledger).await {
        Ok(()) => {
            state.metrics.record_persist_result(true);
            debug!("snapshot persisted");
            Durability::Persisted
        }
        Err(err) => {
            state.metrics.record_persist_result(false);
            warn!("snapshot write failed, change kept in memory only: {:#}", err);
            Durability::Degraded
        }
    }
}
