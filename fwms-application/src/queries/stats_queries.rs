use fwms_domain::{impact_stats, ImpactStats, User};

use crate::{AppError, AppState};

/// Open to every authenticated role.
pub async fn impact(state: &AppState, _actor: &User) -> Result<ImpactStats, AppError> {
    let ledger = state.ledger.read().await;
    Ok(impact_stats(&ledger))
}
