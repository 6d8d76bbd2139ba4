// Transportation entity
// A scheduled physical collection, backed by an approved pickup request
// or entered manually by an admin

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{
    RequestId, TransportId, TransportStatus, UserId, WasteCategory, WasteEntryId,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransportSource {
    Request {
        request_id: RequestId,
        waste_entry_id: WasteEntryId,
    },
    Manual,
}

impl TransportSource {
    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            TransportSource::Request { request_id, .. } => Some(*request_id),
            TransportSource::Manual => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transportation {
    pub id: TransportId,
    pub source: TransportSource,
    pub destination: String,
    pub category: WasteCategory,
    pub quantity_kg: f64,
    pub scheduled_date: NaiveDate,
    pub time_window: String,
    pub carrier: String,
    pub status: TransportStatus,
    pub scheduled_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManualTransport {
    pub destination: String,
    pub category: WasteCategory,
    #[serde(alias = "quantity")]
    pub quantity_kg: f64,
}

#[derive(Debug, Clone)]
pub enum NewTransportSource {
    Request(RequestId),
    Manual(ManualTransport),
}

#[derive(Debug, Clone)]
pub struct NewTransportation {
    pub source: NewTransportSource,
    pub scheduled_date: NaiveDate,
    pub time_window: String,
    pub carrier: String,
    pub scheduled_by: UserId,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleTransportPayload {
    #[serde(default, alias = "requestId")]
    pub request_id: Option<uuid::Uuid>,
    #[serde(default)]
    pub manual: Option<ManualTransport>,
    #[serde(default, alias = "scheduledDate", alias = "date")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default, alias = "timeWindow", alias = "time")]
    pub time_window: Option<String>,
    #[serde(default, alias = "assignedCarrier")]
    pub carrier: Option<String>,
}

/// Partial update of a transportation record. `status` accepts only
/// `in_transit` and `cancelled`; completion has its own action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransportPatch {
    #[serde(default, alias = "scheduledDate", alias = "date")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default, alias = "timeWindow", alias = "time")]
    pub time_window: Option<String>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub status: Option<TransportStatus>,
}

impl TransportPatch {
    pub fn is_empty(&self) -> bool {
        self.scheduled_date.is_none()
            && self.time_window.is_none()
            && self.carrier.is_none()
            && self.status.is_none()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TransportQuery {
    pub status: Option<TransportStatus>,
}
