use fwms_domain::{ActivityQuery, ActivityRecord, Role, User};

use super::list_limit;
use crate::identity::require_cafe_role;
use crate::{AppError, AppState};

pub async fn recent_activity(
    state: &AppState,
    actor: &User,
    query: ActivityQuery,
) -> Result<Vec<ActivityRecord>, AppError> {
    require_cafe_role(actor, &[Role::Admin, Role::Staff])?;
    let limit = list_limit(state, query.limit);
    let ledger = state.ledger.read().await;
    Ok(ledger.activity.iter().rev().take(limit).cloned().collect())
}
