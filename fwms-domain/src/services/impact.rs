use std::collections::BTreeMap;

use serde::Serialize;

use crate::services::FoodLedger;
use crate::value_objects::{WasteCategory, WasteStatus};

/// Aggregates shown on the impact dashboards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImpactStats {
    pub entries_logged: usize,
    pub logged_kg: f64,
    pub pending_kg: f64,
    pub collected_kg: f64,
    pub dropped_kg: f64,
    pub kg_by_category: BTreeMap<WasteCategory, f64>,
    pub open_requests: usize,
    pub completed_pickups: usize,
    pub points_awarded: f64,
}

pub fn impact_stats(ledger: &FoodLedger) -> ImpactStats {
    let mut stats = ImpactStats {
        kg_by_category: WasteCategory::ALL.iter().map(|category| (*category, 0.0)).collect(),
        ..ImpactStats::default()
    };

    for entry in &ledger.waste_entries {
        stats.entries_logged += 1;
        stats.logged_kg += entry.quantity_kg;
        match entry.status {
            WasteStatus::Pending => stats.pending_kg += entry.quantity_kg,
            WasteStatus::Collected => stats.collected_kg += entry.quantity_kg,
            WasteStatus::Dropped => stats.dropped_kg += entry.quantity_kg,
        }
        *stats.kg_by_category.entry(entry.category).or_default() += entry.quantity_kg;
    }

    stats.open_requests = ledger
        .pickup_requests
        .iter()
        .filter(|request| request.status.is_open())
        .count();
    // One points entry per completion; entries are never removed.
    stats.completed_pickups = ledger.points_history.len();
    stats.points_awarded = ledger.points_history.iter().map(|entry| entry.points).sum();
    stats
}
