use fwms_domain::{Role, TransportId, TransportQuery, Transportation, User};

use crate::identity::require_cafe_role;
use crate::{AppError, AppState};

pub async fn list_transport(
    state: &AppState,
    actor: &User,
    query: TransportQuery,
) -> Result<Vec<Transportation>, AppError> {
    require_cafe_role(actor, &[Role::Admin])?;
    let ledger = state.ledger.read().await;
    Ok(ledger
        .transportation
        .iter()
        .filter(|record| query.status.map_or(true, |status| record.status == status))
        .cloned()
        .collect())
}

pub async fn get_transport(
    state: &AppState,
    actor: &User,
    id: TransportId,
) -> Result<Transportation, AppError> {
    require_cafe_role(actor, &[Role::Admin])?;
    let ledger = state.ledger.read().await;
    ledger
        .transportation(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("transportation '{}' not found", id)))
}
