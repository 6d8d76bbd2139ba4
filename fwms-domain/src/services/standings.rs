use std::cmp::Ordering;
use std::collections::HashMap;

use crate::entities::{OrganizationPoints, PointsSummary, PointsTier};
use crate::services::FoodLedger;

pub fn points_summary(ledger: &FoodLedger, organization: &str) -> PointsSummary {
    let mut history = ledger
        .points_history
        .iter()
        .filter(|entry| entry.organization == organization)
        .cloned()
        .collect::<Vec<_>>();
    history.sort_by(|a, b| b.awarded_at.cmp(&a.awarded_at));
    let total = history.iter().map(|entry| entry.points).sum::<f64>();

    PointsSummary {
        organization: organization.to_string(),
        total,
        tier: PointsTier::for_total(total),
        points_to_next_tier: PointsTier::points_to_next(total),
        history,
    }
}

/// Totals per organization, highest first; ties ordered by name.
pub fn leaderboard(ledger: &FoodLedger) -> Vec<OrganizationPoints> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for entry in &ledger.points_history {
        let slot = totals.entry(entry.organization.as_str()).or_default();
        slot.0 += entry.points;
        slot.1 += 1;
    }

    let mut board = totals
        .into_iter()
        .map(|(organization, (total, pickups))| OrganizationPoints {
            organization: organization.to_string(),
            total,
            tier: PointsTier::for_total(total),
            pickups,
        })
        .collect::<Vec<_>>();
    board.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.organization.cmp(&b.organization))
    });
    board
}
