use chrono::Utc;
use tracing::info;

use fwms_domain::{CafeId, LogWastePayload, NewWasteEntry, Role, User, WasteEntry, WasteEntryId};

use super::{missing, normalize_optional_text};
use crate::identity::{ensure_cafe_scope, require_cafe_role};
use crate::persistence::persist;
use crate::{AppError, AppState, Written};

pub async fn log_waste(
    state: &AppState,
    actor: &User,
    payload: LogWastePayload,
) -> Result<Written<WasteEntry>, AppError> {
    let own_cafe = require_cafe_role(actor, &[Role::Admin, Role::Staff])?.clone();
    let cafe_id = normalize_optional_text(payload.cafe_id)
        .map(CafeId)
        .unwrap_or(own_cafe);
    ensure_cafe_scope(actor, &cafe_id)?;

    let input = NewWasteEntry {
        cafe_id,
        category: payload.category.ok_or_else(|| missing("category"))?,
        item_name: normalize_optional_text(payload.item_name)
            .ok_or_else(|| missing("item_name"))?,
        quantity_kg: payload.quantity_kg.ok_or_else(|| missing("quantity_kg"))?,
        expiry_date: payload.expiry_date.ok_or_else(|| missing("expiry_date"))?,
        assigned_to: payload.assigned_to.ok_or_else(|| missing("assigned_to"))?,
        logged_by: actor.id.clone(),
    };

    let mut ledger = state.ledger.write().await;
    let entry = ledger.log_waste(input, Utc::now())?;
    let durability = persist(state, &ledger).await;
    state.metrics.record_waste_logged();
    info!(
        "waste entry {} logged: {} kg {} for {}",
        entry.id, entry.quantity_kg, entry.category, entry.assigned_to
    );
    Ok(Written::new(entry, durability))
}

pub async fn mark_dropped(
    state: &AppState,
    actor: &User,
    id: WasteEntryId,
) -> Result<Written<WasteEntry>, AppError> {
    require_cafe_role(actor, &[Role::Admin, Role::Staff])?;

    let mut ledger = state.ledger.write().await;
    let cafe_id = ledger
        .waste_entry(id)
        .map(|entry| entry.cafe_id.clone())
        .ok_or_else(|| AppError::NotFound(format!("waste entry '{}' not found", id)))?;
    ensure_cafe_scope(actor, &cafe_id)?;

    let entry = ledger.mark_dropped(id, &actor.id, Utc::now())?;
    let durability = persist(state, &ledger).await;
    info!("waste entry {} dropped by {}", entry.id, actor.id);
    Ok(Written::new(entry, durability))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use fwms_domain::{AssignmentTarget, WasteCategory, WasteStatus};

    use super::*;
    use crate::testing::{self, FailingSnapshots, RecordingSnapshots};
    use crate::Durability;

    fn payload(category: WasteCategory, target: AssignmentTarget) -> LogWastePayload {
        LogWastePayload {
            cafe_id: None,
            category: Some(category),
            item_name: Some("Croissants".to_string()),
            quantity_kg: Some(15.0),
            expiry_date: NaiveDate::from_ymd_opt(2026, 10, 25),
            assigned_to: Some(target),
        }
    }

    #[tokio::test]
    async fn staff_logs_waste_for_own_cafe() {
        let repo = Arc::new(RecordingSnapshots::default());
        let state = testing::state_with(repo.clone());
        let staff = testing::caller(&state, "staff-1").await;

        let written = log_waste(
            &state,
            &staff,
            payload(WasteCategory::Edible, AssignmentTarget::Charity),
        )
        .await
        .expect("log waste");
        assert_eq!(written.durability, Durability::Persisted);
        assert_eq!(written.data.cafe_id.as_str(), "cafe-1");
        assert_eq!(written.data.status, WasteStatus::Pending);
        assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn mismatch_creates_nothing() {
        let state = testing::state();
        let staff = testing::caller(&state, "staff-1").await;
        let err = log_waste(
            &state,
            &staff,
            payload(WasteCategory::Organic, AssignmentTarget::Charity),
        )
        .await
        .expect_err("mismatch");
        match err {
            AppError::BadRequest(message) => assert!(message.contains("category/assignment mismatch")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(state.ledger.read().await.waste_entries.is_empty());
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let state = testing::state();
        let staff = testing::caller(&state, "staff-1").await;
        let mut input = payload(WasteCategory::Edible, AssignmentTarget::Charity);
        input.expiry_date = None;
        let err = log_waste(&state, &staff, input).await.expect_err("missing");
        match err {
            AppError::BadRequest(message) => assert_eq!(message, "expiry_date is required"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn staff_cannot_log_for_another_cafe_and_collectors_cannot_log() {
        let state = testing::state();
        let staff = testing::caller(&state, "staff-1").await;
        let mut input = payload(WasteCategory::Edible, AssignmentTarget::Charity);
        input.cafe_id = Some("cafe-2".to_string());
        let err = log_waste(&state, &staff, input).await.expect_err("other cafe");
        assert!(matches!(err, AppError::Forbidden(_)));

        let charity = testing::caller(&state, "charity-1").await;
        let err = log_waste(
            &state,
            &charity,
            payload(WasteCategory::Edible, AssignmentTarget::Charity),
        )
        .await
        .expect_err("charity");
        assert!(matches!(err, AppError::Forbidden(_)));

        let unassigned = testing::caller(&state, "staff-x").await;
        let err = log_waste(
            &state,
            &unassigned,
            payload(WasteCategory::Edible, AssignmentTarget::Charity),
        )
        .await
        .expect_err("no cafe");
        assert!(matches!(err, AppError::Forbidden(message) if message == "no organization assigned"));
    }

    #[tokio::test]
    async fn failed_snapshot_is_reported_as_degraded() {
        let state = testing::state_with(Arc::new(FailingSnapshots));
        let staff = testing::caller(&state, "staff-1").await;
        let written = log_waste(
            &state,
            &staff,
            payload(WasteCategory::Edible, AssignmentTarget::Charity),
        )
        .await
        .expect("kept in memory");
        assert_eq!(written.durability, Durability::Degraded);
        assert!(state.metrics.storage_degraded());
        assert_eq!(state.ledger.read().await.waste_entries.len(), 1);
    }

    #[tokio::test]
    async fn other_cafe_staff_cannot_drop() {
        let state = testing::state();
        let staff = testing::caller(&state, "staff-1").await;
        let entry = log_waste(
            &state,
            &staff,
            payload(WasteCategory::Edible, AssignmentTarget::Charity),
        )
        .await
        .expect("log waste")
        .data;

        let other = testing::caller(&state, "staff-2").await;
        let err = mark_dropped(&state, &other, entry.id).await.expect_err("other cafe");
        assert!(matches!(err, AppError::Forbidden(_)));

        let dropped = mark_dropped(&state, &staff, entry.id).await.expect("drop");
        assert_eq!(dropped.data.status, WasteStatus::Dropped);
    }
}
