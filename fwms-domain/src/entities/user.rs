// User entity
// Role and café association are fixed once the user exists

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{CafeId, Role, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub role: Role,
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_id: Option<CafeId>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn belongs_to_cafe(&self, cafe_id: &CafeId) -> bool {
        self.cafe_id.as_ref() == Some(cafe_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub id: String,
    pub role: Role,
    pub organization: String,
    #[serde(default)]
    pub cafe_id: Option<String>,
}
