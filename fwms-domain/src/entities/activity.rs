// Activity log entity
// Append-only audit trail of state-changing actions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ActivityId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: ActivityId,
    pub actor_id: UserId,
    pub action: String,
    pub subject_id: String,
    pub detail: String,
    pub at: DateTime<Utc>,
}

pub mod actions {
    pub const USER_CREATED: &str = "user.created";
    pub const WASTE_LOGGED: &str = "waste.logged";
    pub const WASTE_DROPPED: &str = "waste.dropped";
    pub const REQUEST_CREATED: &str = "request.created";
    pub const REQUEST_APPROVED: &str = "request.approved";
    pub const REQUEST_REJECTED: &str = "request.rejected";
    pub const TRANSPORT_SCHEDULED: &str = "transport.scheduled";
    pub const TRANSPORT_UPDATED: &str = "transport.updated";
    pub const TRANSPORT_COMPLETED: &str = "transport.completed";
    pub const TRANSPORT_DELETED: &str = "transport.deleted";
}

#[derive(Debug, Default, Deserialize)]
pub struct ActivityQuery {
    pub limit: Option<usize>,
}
