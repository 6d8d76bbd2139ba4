// Waste entry entity
// A logged quantity of café waste awaiting collection

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{
    AssignmentTarget, CafeId, UserId, WasteCategory, WasteEntryId, WasteStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteEntry {
    pub id: WasteEntryId,
    pub cafe_id: CafeId,
    pub category: WasteCategory,
    pub item_name: String,
    pub quantity_kg: f64,
    pub expiry_date: NaiveDate,
    pub status: WasteStatus,
    pub assigned_to: AssignmentTarget,
    pub logged_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for logging a new waste entry.
#[derive(Debug, Clone)]
pub struct NewWasteEntry {
    pub cafe_id: CafeId,
    pub category: WasteCategory,
    pub item_name: String,
    pub quantity_kg: f64,
    pub expiry_date: NaiveDate,
    pub assigned_to: AssignmentTarget,
    pub logged_by: UserId,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogWastePayload {
    #[serde(default, alias = "cafeId")]
    pub cafe_id: Option<String>,
    #[serde(default)]
    pub category: Option<WasteCategory>,
    #[serde(default, alias = "itemName")]
    pub item_name: Option<String>,
    #[serde(default, alias = "quantity")]
    pub quantity_kg: Option<f64>,
    #[serde(default, alias = "expiryDate")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, alias = "assignedTo")]
    pub assigned_to: Option<AssignmentTarget>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WasteQuery {
    pub cafe_id: Option<String>,
    pub status: Option<WasteStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketplaceSort {
    #[default]
    None,
    Expiry,
    Quantity,
}

#[derive(Debug, Default, Deserialize)]
pub struct MarketplaceQuery {
    pub target: Option<AssignmentTarget>,
    #[serde(default)]
    pub sort: MarketplaceSort,
}
