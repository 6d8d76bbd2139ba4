use fwms_domain::{CafeId, Role, User, WasteEntry, WasteEntryId, WasteQuery};

use crate::identity::{ensure_cafe_scope, require_cafe_role};
use crate::{AppError, AppState};

/// Staff see their own café; admin sees every café and may filter by one.
pub async fn list_waste(
    state: &AppState,
    actor: &User,
    query: WasteQuery,
) -> Result<Vec<WasteEntry>, AppError> {
    let own_cafe = require_cafe_role(actor, &[Role::Admin, Role::Staff])?.clone();
    let cafe = match actor.role {
        Role::Admin => query
            .cafe_id
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(CafeId),
        _ => Some(own_cafe),
    };

    let ledger = state.ledger.read().await;
    Ok(ledger
        .waste_entries
        .iter()
        .filter(|entry| cafe.as_ref().map_or(true, |cafe| &entry.cafe_id == cafe))
        .filter(|entry| query.status.map_or(true, |status| entry.status == status))
        .cloned()
        .collect())
}

pub async fn get_waste(
    state: &AppState,
    actor: &User,
    id: WasteEntryId,
) -> Result<WasteEntry, AppError> {
    require_cafe_role(actor, &[Role::Admin, Role::Staff])?;
    let ledger = state.ledger.read().await;
    let entry = ledger
        .waste_entry(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("waste entry '{}' not found", id)))?;
    ensure_cafe_scope(actor, &entry.cafe_id)?;
    Ok(entry)
}
