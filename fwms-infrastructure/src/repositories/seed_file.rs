use async_trait::async_trait;
use tokio::fs;

use fwms_domain::{NewUser, Role, SeedRepository};

pub struct YamlSeedRepository;

impl YamlSeedRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlSeedRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeedRepository for YamlSeedRepository {
    async fn load_users(&self, path: &str) -> anyhow::Result<Vec<NewUser>> {
        let content = fs::read_to_string(path).await?;
        let users: Vec<NewUser> = serde_yaml::from_str(&content)?;
        Ok(users)
    }
}

fn seed(id: &str, role: Role, organization: &str, cafe_id: Option<&str>) -> NewUser {
    NewUser {
        id: id.to_string(),
        role,
        organization: organization.to_string(),
        cafe_id: cafe_id.map(str::to_string),
    }
}

/// Demo accounts used when neither a snapshot nor a seed file exists.
pub fn default_seed_users() -> Vec<NewUser> {
    vec![
        seed("admin-1", Role::Admin, "From Plate to Plant", Some("cafe-1")),
        seed("staff-1", Role::Staff, "Green Bean Café", Some("cafe-1")),
        seed("staff-2", Role::Staff, "Corner Roasters", Some("cafe-2")),
        seed("charity-1", Role::Charity, "City Food Bank", None),
        seed("farmer-1", Role::Farmer, "Sunrise Farm", None),
    ]
}
