use fwms_domain::{Notification, NotificationQuery, User};

use super::list_limit;
use crate::{AppError, AppState};

/// The caller's notifications, newest first.
pub async fn list_notifications(
    state: &AppState,
    actor: &User,
    query: NotificationQuery,
) -> Result<Vec<Notification>, AppError> {
    let limit = list_limit(state, query.limit);
    let ledger = state.ledger.read().await;
    Ok(ledger
        .notifications
        .iter()
        .rev()
        .filter(|item| item.user_id == actor.id)
        .filter(|item| !query.unread_only || !item.read)
        .take(limit)
        .cloned()
        .collect())
}
