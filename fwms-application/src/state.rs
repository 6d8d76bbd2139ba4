use std::sync::Arc;

use fwms_domain::ports::SnapshotRepository;
use fwms_domain::{FoodLedger, RuntimeConfig};
use tokio::sync::RwLock;

use crate::Metrics;

/// Shared handler state. The ledger lock is the single point of
/// serialization for every mutation.
#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub ledger: Arc<RwLock<FoodLedger>>,
    pub snapshot_repo: Arc<dyn SnapshotRepository>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        ledger: FoodLedger,
        snapshot_repo: Arc<dyn SnapshotRepository>,
    ) -> Self {
        Self {
            config,
            ledger: Arc::new(RwLock::new(ledger)),
            snapshot_repo,
            metrics: Arc::new(Metrics::default()),
        }
    }
}
