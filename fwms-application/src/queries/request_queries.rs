use fwms_domain::{PickupRequest, RequestQuery, Role, User};

use crate::identity::require_cafe;
use crate::{AppError, AppState};

/// Requesters see their own requests, staff see requests on their café's
/// entries, admin sees everything.
pub async fn list_requests(
    state: &AppState,
    actor: &User,
    query: RequestQuery,
) -> Result<Vec<PickupRequest>, AppError> {
    let ledger = state.ledger.read().await;
    let visible: Vec<&PickupRequest> = match actor.role {
        Role::Admin => ledger.pickup_requests.iter().collect(),
        Role::Staff => {
            let cafe = require_cafe(actor)?;
            ledger
                .pickup_requests
                .iter()
                .filter(|request| {
                    ledger
                        .waste_entry(request.waste_entry_id)
                        .map_or(false, |entry| &entry.cafe_id == cafe)
                })
                .collect()
        }
        Role::Charity | Role::Farmer => ledger
            .pickup_requests
            .iter()
            .filter(|request| request.requester_id == actor.id)
            .collect(),
    };
    Ok(visible
        .into_iter()
        .filter(|request| query.status.map_or(true, |status| request.status == status))
        .cloned()
        .collect())
}
