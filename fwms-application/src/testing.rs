// Shared fixtures for application and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;

use fwms_domain::ports::SnapshotRepository;
use fwms_domain::{CafeId, FoodLedger, Role, RuntimeConfig, User, UserId};

use crate::AppState;

#[derive(Default)]
pub struct RecordingSnapshots {
    pub saves: AtomicUsize,
}

#[async_trait]
impl SnapshotRepository for RecordingSnapshots {
    async fn load(&self) -> anyhow::Result<Option<FoodLedger>> {
        Ok(None)
    }

    async fn save(&self, _ledger: &FoodLedger) -> anyhow::Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn is_durable(&self) -> bool {
        true
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct FailingSnapshots;

#[async_trait]
impl SnapshotRepository for FailingSnapshots {
    async fn load(&self) -> anyhow::Result<Option<FoodLedger>> {
        Ok(None)
    }

    async fn save(&self, _ledger: &FoodLedger) -> anyhow::Result<()> {
        Err(anyhow!("read-only file system"))
    }

    fn is_durable(&self) -> bool {
        true
    }

    /// The target stays reachable; only writes fail.
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

fn user(id: &str, role: Role, organization: &str, cafe: Option<&str>) -> User {
    User {
        id: UserId::new(id),
        role,
        organization: organization.to_string(),
        cafe_id: cafe.map(CafeId::new),
        created_at: Utc::now(),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user("admin-1", Role::Admin, "Green Bean Café", Some("cafe-1")),
        user("staff-1", Role::Staff, "Green Bean Café", Some("cafe-1")),
        user("staff-2", Role::Staff, "Corner Roasters", Some("cafe-2")),
        user("staff-x", Role::Staff, "Unassigned", None),
        user("charity-1", Role::Charity, "City Food Bank", None),
        user("farmer-1", Role::Farmer, "Sunrise Farm", None),
    ]
}

pub fn state_with(repo: Arc<dyn SnapshotRepository>) -> AppState {
    AppState::new(RuntimeConfig::default(), FoodLedger::with_users(users()), repo)
}

pub fn state() -> AppState {
    state_with(Arc::new(RecordingSnapshots::default()))
}

pub async fn caller(state: &AppState, id: &str) -> User {
    state
        .ledger
        .read()
        .await
        .user(&UserId::new(id))
        .cloned()
        .expect("seeded user")
}
