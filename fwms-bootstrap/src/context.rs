use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use fwms_application::AppState;
use fwms_domain::{FoodLedger, NewUser, SeedRepository, SnapshotRepository, UserId};
use fwms_infrastructure::{
    default_seed_users, AppConfig, JsonSnapshotRepository, MemorySnapshotRepository,
    YamlSeedRepository,
};

const SEED_ACTOR: &str = "system";

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let snapshot_repo: Arc<dyn SnapshotRepository> = match &runtime_config.data_path {
            Some(path) => Arc::new(JsonSnapshotRepository::new(path)),
            None => {
                warn!("data_path is empty, running memory-only; data is lost on restart");
                Arc::new(MemorySnapshotRepository)
            }
        };

        let ledger = match snapshot_repo.load().await? {
            Some(ledger) => ledger,
            None => {
                let users = match &runtime_config.seed_path {
                    Some(path) => YamlSeedRepository::new()
                        .load_users(path)
                        .await
                        .with_context(|| format!("load seed users from {}", path))?,
                    None => {
                        info!("no snapshot or seed file, using built-in demo users");
                        default_seed_users()
                    }
                };
                let ledger = seed_ledger(users)?;
                if let Err(err) = snapshot_repo.save(&ledger).await {
                    warn!("initial snapshot write failed: {:#}", err);
                }
                ledger
            }
        };

        let state = AppState::new(runtime_config, ledger, snapshot_repo);
        Ok(Self { state })
    }
}

fn seed_ledger(users: Vec<NewUser>) -> Result<FoodLedger> {
    let mut ledger = FoodLedger::default();
    let actor = UserId::new(SEED_ACTOR);
    let now = Utc::now();
    for user in users {
        let id = user.id.clone();
        ledger
            .add_user(user, &actor, now)
            .with_context(|| format!("seed user '{}'", id))?;
    }
    info!("seeded {} users", ledger.users.len());
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use fwms_domain::Role;

    use super::*;

    #[tokio::test]
    async fn memory_only_run_uses_demo_users() {
        let config = AppConfig {
            data_path: None,
            ..AppConfig::default()
        };
        let context = AppContext::new(&config).await.expect("context");
        let ledger = context.state.ledger.read().await;
        assert_eq!(ledger.users.len(), default_seed_users().len());
        assert!(!context.state.snapshot_repo.is_durable());
    }

    #[tokio::test]
    async fn existing_snapshot_wins_over_seed() {
        let dir = std::env::temp_dir().join(format!("fwms-context-{}", uuid::Uuid::new_v4()));
        let path = dir.join("fwms.json");
        let repo = JsonSnapshotRepository::new(&path);
        let ledger = seed_ledger(vec![NewUser {
            id: "farmer-7".to_string(),
            role: Role::Farmer,
            organization: "Valley Farm".to_string(),
            cafe_id: None,
        }])
        .expect("seed");
        repo.save(&ledger).await.expect("save");

        let config = AppConfig {
            data_path: Some(path.to_string_lossy().to_string()),
            ..AppConfig::default()
        };
        let context = AppContext::new(&config).await.expect("context");
        let loaded = context.state.ledger.read().await;
        assert_eq!(loaded.users.len(), 1);
        assert_eq!(loaded.users[0].id.as_str(), "farmer-7");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn duplicate_seed_users_fail_startup() {
        let user = NewUser {
            id: "staff-1".to_string(),
            role: Role::Staff,
            organization: "Green Bean Café".to_string(),
            cafe_id: Some("cafe-1".to_string()),
        };
        assert!(seed_ledger(vec![user.clone(), user]).is_err());
    }
}
