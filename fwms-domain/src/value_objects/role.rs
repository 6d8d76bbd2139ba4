// Role value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::value_objects::AssignmentTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Staff,
    Charity,
    Farmer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Charity => "charity",
            Role::Farmer => "farmer",
        }
    }

    /// Café-side roles log waste and decide on pickup requests.
    pub fn is_cafe_side(&self) -> bool {
        matches!(self, Role::Admin | Role::Staff)
    }

    /// The assignment target a requester of this role collects, if any.
    pub fn requester_target(&self) -> Option<AssignmentTarget> {
        match self {
            Role::Charity => Some(AssignmentTarget::Charity),
            Role::Farmer => Some(AssignmentTarget::Farmer),
            Role::Admin | Role::Staff => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            "charity" => Ok(Role::Charity),
            "farmer" => Ok(Role::Farmer),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}
