use tracing::debug;

use fwms_domain::services::marketplace;
use fwms_domain::{MarketplaceQuery, User, WasteEntry};

use crate::{AppError, AppState};

/// Charities and farmers browse their own target; café-side roles must name one.
pub async fn browse(
    state: &AppState,
    actor: &User,
    query: MarketplaceQuery,
) -> Result<Vec<WasteEntry>, AppError> {
    let target = match actor.role.requester_target() {
        Some(own) => own,
        None => query
            .target
            .ok_or_else(|| AppError::BadRequest("target is required".to_string()))?,
    };
    debug!("{} browsing marketplace for {}", actor.id, target);
    let ledger = state.ledger.read().await;
    Ok(marketplace::available(&ledger, target, query.sort))
}
