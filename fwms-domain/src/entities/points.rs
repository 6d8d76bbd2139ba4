// Points ledger entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{PointsEntryId, TransportId, UserId};

/// 1 kg collected earns 1 point.
pub const POINTS_PER_KG: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsEntry {
    pub id: PointsEntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub organization: String,
    pub points: f64,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation_id: Option<TransportId>,
    pub awarded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl PointsTier {
    const THRESHOLDS: [(f64, PointsTier); 4] = [
        (200.0, PointsTier::Platinum),
        (100.0, PointsTier::Gold),
        (50.0, PointsTier::Silver),
        (0.0, PointsTier::Bronze),
    ];

    pub fn for_total(total: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(threshold, _)| total >= *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(PointsTier::Bronze)
    }

    /// Points still needed to reach the next tier, `None` at the top.
    pub fn points_to_next(total: f64) -> Option<f64> {
        Self::THRESHOLDS
            .iter()
            .rev()
            .find(|(threshold, _)| *threshold > total)
            .map(|(threshold, _)| threshold - total)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PointsSummary {
    pub organization: String,
    pub total: f64,
    pub tier: PointsTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_to_next_tier: Option<f64>,
    pub history: Vec<PointsEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationPoints {
    pub organization: String,
    pub total: f64,
    pub tier: PointsTier,
    pub pickups: usize,
}
