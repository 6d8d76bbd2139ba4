use std::cmp::Ordering;

use crate::entities::{MarketplaceSort, WasteEntry};
use crate::services::FoodLedger;
use crate::value_objects::{AssignmentTarget, WasteStatus};

/// Pending entries for `target` that no pending or approved request holds.
///
/// Sorting is stable, so ties keep the order in which entries were logged.
pub fn available(
    ledger: &FoodLedger,
    target: AssignmentTarget,
    sort: MarketplaceSort,
) -> Vec<WasteEntry> {
    let mut entries = ledger
        .waste_entries
        .iter()
        .filter(|entry| entry.status == WasteStatus::Pending && entry.assigned_to == target)
        .filter(|entry| ledger.open_request_for(entry.id).is_none())
        .cloned()
        .collect::<Vec<_>>();

    match sort {
        MarketplaceSort::None => {}
        MarketplaceSort::Expiry => entries.sort_by_key(|entry| entry.expiry_date),
        MarketplaceSort::Quantity => entries.sort_by(|a, b| {
            b.quantity_kg
                .partial_cmp(&a.quantity_kg)
                .unwrap_or(Ordering::Equal)
        }),
    }
    entries
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::entities::NewWasteEntry;
    use crate::value_objects::{CafeId, UserId, WasteCategory};

    fn log(ledger: &mut FoodLedger, name: &str, quantity: f64, day: u32, target: AssignmentTarget) -> WasteEntry {
        let category = match target {
            AssignmentTarget::Charity => WasteCategory::Edible,
            AssignmentTarget::Farmer => WasteCategory::Organic,
        };
        ledger
            .log_waste(
                NewWasteEntry {
                    cafe_id: CafeId::new("cafe-1"),
                    category,
                    item_name: name.to_string(),
                    quantity_kg: quantity,
                    expiry_date: NaiveDate::from_ymd_opt(2026, 11, day).expect("date"),
                    assigned_to: target,
                    logged_by: UserId::new("staff-1"),
                },
                Utc::now(),
            )
            .expect("log waste")
    }

    fn names(entries: &[WasteEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.item_name.as_str()).collect()
    }

    #[test]
    fn filters_by_target() {
        let mut ledger = FoodLedger::default();
        log(&mut ledger, "bread", 3.0, 5, AssignmentTarget::Charity);
        log(&mut ledger, "peels", 9.0, 2, AssignmentTarget::Farmer);

        let charity = available(&ledger, AssignmentTarget::Charity, MarketplaceSort::None);
        assert_eq!(names(&charity), vec!["bread"]);
        let farmer = available(&ledger, AssignmentTarget::Farmer, MarketplaceSort::None);
        assert_eq!(names(&farmer), vec!["peels"]);
    }

    #[test]
    fn sorts_stably() {
        let mut ledger = FoodLedger::default();
        log(&mut ledger, "a", 2.0, 9, AssignmentTarget::Charity);
        log(&mut ledger, "b", 7.0, 3, AssignmentTarget::Charity);
        log(&mut ledger, "c", 7.0, 9, AssignmentTarget::Charity);
        log(&mut ledger, "d", 1.0, 3, AssignmentTarget::Charity);

        let none = available(&ledger, AssignmentTarget::Charity, MarketplaceSort::None);
        assert_eq!(names(&none), vec!["a", "b", "c", "d"]);
        let expiry = available(&ledger, AssignmentTarget::Charity, MarketplaceSort::Expiry);
        assert_eq!(names(&expiry), vec!["b", "d", "a", "c"]);
        let quantity = available(&ledger, AssignmentTarget::Charity, MarketplaceSort::Quantity);
        assert_eq!(names(&quantity), vec!["b", "c", "a", "d"]);
    }
}
