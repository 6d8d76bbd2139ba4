use chrono::Utc;
use tracing::info;

use fwms_domain::{
    CreateRequestPayload, FoodLedger, NewPickupRequest, PickupRequest, RequestId, Role, User,
    WasteEntryId,
};

use super::{missing, normalize_optional_text};
use crate::identity::{ensure_cafe_scope, require_cafe_role, require_role};
use crate::persistence::persist;
use crate::{AppError, AppState, Written};

pub async fn create_request(
    state: &AppState,
    actor: &User,
    payload: CreateRequestPayload,
) -> Result<Written<PickupRequest>, AppError> {
    require_role(actor, &[Role::Charity, Role::Farmer])?;
    let requester_type = actor
        .role
        .requester_target()
        .ok_or_else(|| AppError::Forbidden("only charities and farmers request pickups".to_string()))?;
    let waste_entry_id = payload
        .waste_entry_id
        .map(WasteEntryId::from)
        .ok_or_else(|| missing("waste_entry_id"))?;

    let input = NewPickupRequest {
        waste_entry_id,
        requester_id: actor.id.clone(),
        requester_type,
        organization: actor.organization.clone(),
        preferred_time: normalize_optional_text(payload.preferred_time),
        notes: normalize_optional_text(payload.notes),
    };

    let mut ledger = state.ledger.write().await;
    let request = ledger.create_request(input, Utc::now())?;
    let durability = persist(state, &ledger).await;
    state.metrics.record_request_created();
    info!(
        "pickup request {} created by {} for waste entry {}",
        request.id, actor.id, request.waste_entry_id
    );
    Ok(Written::new(request, durability))
}

pub async fn approve_request(
    state: &AppState,
    actor: &User,
    id: RequestId,
) -> Result<Written<PickupRequest>, AppError> {
    decide(state, actor, id, true).await
}

pub async fn reject_request(
    state: &AppState,
    actor: &User,
    id: RequestId,
) -> Result<Written<PickupRequest>, AppError> {
    decide(state, actor, id, false).await
}

async fn decide(
    state: &AppState,
    actor: &User,
    id: RequestId,
    approve: bool,
) -> Result<Written<PickupRequest>, AppError> {
    require_cafe_role(actor, &[Role::Admin, Role::Staff])?;

    let mut ledger = state.ledger.write().await;
    authorize_decision(&ledger, actor, id)?;
    let now = Utc::now();
    let request = if approve {
        ledger.approve_request(id, &actor.id, now)?
    } else {
        ledger.reject_request(id, &actor.id, now)?
    };
    let durability = persist(state, &ledger).await;
    state.metrics.record_request_decided();
    info!("pickup request {} {} by {}", request.id, request.status, actor.id);
    Ok(Written::new(request, durability))
}

fn authorize_decision(ledger: &FoodLedger, actor: &User, id: RequestId) -> Result<(), AppError> {
    let request = ledger
        .pickup_request(id)
        .ok_or_else(|| AppError::NotFound(format!("pickup request '{}' not found", id)))?;
    let entry = ledger.waste_entry(request.waste_entry_id).ok_or_else(|| {
        AppError::NotFound(format!("waste entry '{}' not found", request.waste_entry_id))
    })?;
    ensure_cafe_scope(actor, &entry.cafe_id)
}
