// Pickup request entity
// A charity's or farmer's claim on one waste entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{AssignmentTarget, RequestId, RequestStatus, UserId, WasteEntryId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupRequest {
    pub id: RequestId,
    pub waste_entry_id: WasteEntryId,
    pub requester_id: UserId,
    pub requester_type: AssignmentTarget,
    pub organization: String,
    pub requested_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewPickupRequest {
    pub waste_entry_id: WasteEntryId,
    pub requester_id: UserId,
    pub requester_type: AssignmentTarget,
    pub organization: String,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateRequestPayload {
    #[serde(default, alias = "wasteEntryId", alias = "waste_id")]
    pub waste_entry_id: Option<uuid::Uuid>,
    #[serde(default, alias = "preferredTime")]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RequestQuery {
    pub status: Option<RequestStatus>,
}
