use async_trait::async_trait;

use crate::entities::NewUser;
use crate::services::FoodLedger;

/// Durable copy of the whole ledger.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<FoodLedger>>;
    async fn save(&self, ledger: &FoodLedger) -> anyhow::Result<()>;
    /// Whether writes survive a restart.
    fn is_durable(&self) -> bool;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait SeedRepository: Send + Sync {
    async fn load_users(&self, path: &str) -> anyhow::Result<Vec<NewUser>>;
}
