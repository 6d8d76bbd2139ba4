use chrono::Utc;
use tracing::info;

use fwms_domain::{
    Completion, NewTransportSource, NewTransportation, RequestId, Role, ScheduleTransportPayload,
    TransportId, TransportPatch, Transportation, User,
};

use super::missing;
use crate::identity::require_cafe_role;
use crate::persistence::persist;
use crate::{AppError, AppState, Written};

pub async fn schedule_transport(
    state: &AppState,
    actor: &User,
    payload: ScheduleTransportPayload,
) -> Result<Written<Transportation>, AppError> {
    require_cafe_role(actor, &[Role::Admin])?;
    let source = match (payload.request_id, payload.manual) {
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest(
                "provide either request_id or manual, not both".to_string(),
            ))
        }
        (Some(request_id), None) => NewTransportSource::Request(RequestId::from(request_id)),
        (None, Some(manual)) => NewTransportSource::Manual(manual),
        (None, None) => return Err(missing("request_id")),
    };

    let input = NewTransportation {
        source,
        scheduled_date: payload
            .scheduled_date
            .ok_or_else(|| missing("scheduled_date"))?,
        time_window: payload.time_window.ok_or_else(|| missing("time_window"))?,
        carrier: payload.carrier.ok_or_else(|| missing("carrier"))?,
        scheduled_by: actor.id.clone(),
    };

    let mut ledger = state.ledger.write().await;
    let record = ledger.schedule_transport(input, Utc::now())?;
    let durability = persist(state, &ledger).await;
    state.metrics.record_transport_scheduled();
    info!(
        "transportation {} scheduled for {} on {} ({})",
        record.id, record.destination, record.scheduled_date, record.carrier
    );
    Ok(Written::new(record, durability))
}

pub async fn update_transport(
    state: &AppState,
    actor: &User,
    id: TransportId,
    patch: TransportPatch,
) -> Result<Written<Transportation>, AppError> {
    require_cafe_role(actor, &[Role::Admin])?;
    if patch.is_empty() {
        return Err(AppError::BadRequest("no fields to update".to_string()));
    }

    let mut ledger = state.ledger.write().await;
    let record = ledger.update_transport(id, patch, &actor.id, Utc::now())?;
    let durability = persist(state, &ledger).await;
    info!("transportation {} updated, status {}", record.id, record.status);
    Ok(Written::new(record, durability))
}

pub async fn complete_transport(
    state: &AppState,
    actor: &User,
    id: TransportId,
) -> Result<Written<Completion>, AppError> {
    require_cafe_role(actor, &[Role::Admin])?;

    let mut ledger = state.ledger.write().await;
    let completion = ledger.complete_transport(id, &actor.id, Utc::now())?;
    let durability = persist(state, &ledger).await;
    state.metrics.record_pickup_completed();
    info!(
        "transportation {} completed, {} points to {}",
        completion.transportation.id, completion.points.points, completion.points.organization
    );
    Ok(Written::new(completion, durability))
}

pub async fn delete_transport(
    state: &AppState,
    actor: &User,
    id: TransportId,
) -> Result<Written<Transportation>, AppError> {
    require_cafe_role(actor, &[Role::Admin])?;

    let mut ledger = state.ledger.write().await;
    let record = ledger.delete_transport(id, &actor.id, Utc::now())?;
    let durability = persist(state, &ledger).await;
    info!("transportation {} deleted ({})", record.id, record.status);
    Ok(Written::new(record, durability))
}
