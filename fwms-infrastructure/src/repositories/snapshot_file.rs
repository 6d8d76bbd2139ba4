use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use fwms_domain::{FoodLedger, SnapshotRepository};

use crate::utils::{ensure_parent_dir, temp_sibling};

/// Keeps the whole ledger as one JSON document. Writes go to a sibling temp
/// file first and are renamed into place, so a crash never leaves a torn file.
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotRepository for JsonSnapshotRepository {
    async fn load(&self) -> anyhow::Result<Option<FoodLedger>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read snapshot {}", self.path.display()))?;
        let ledger: FoodLedger = serde_json::from_str(&content)
            .with_context(|| format!("parse snapshot {}", self.path.display()))?;
        info!(
            "snapshot loaded from {}: {} users, {} waste entries",
            self.path.display(),
            ledger.users.len(),
            ledger.waste_entries.len()
        );
        Ok(Some(ledger))
    }

    async fn save(&self, ledger: &FoodLedger) -> anyhow::Result<()> {
        ensure_parent_dir(&self.path).await?;
        let content = serde_json::to_vec_pretty(ledger)?;
        let tmp = temp_sibling(&self.path);
        fs::write(&tmp, content)
            .await
            .with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        true
    }

    async fn ping(&self) -> anyhow::Result<()> {
        ensure_parent_dir(&self.path).await?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let metadata = fs::metadata(&dir).await?;
        if metadata.permissions().readonly() {
            anyhow::bail!("snapshot directory {} is read-only", dir.display());
        }
        Ok(())
    }
}

/// No-op store for memory-only runs.
#[derive(Default)]
pub struct MemorySnapshotRepository;

#[async_trait]
impl SnapshotRepository for MemorySnapshotRepository {
    async fn load(&self) -> anyhow::Result<Option<FoodLedger>> {
        Ok(None)
    }

    async fn save(&self, _ledger: &FoodLedger) -> anyhow::Result<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
