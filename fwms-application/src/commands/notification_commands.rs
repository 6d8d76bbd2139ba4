use tracing::debug;

use fwms_domain::{Notification, NotificationId, User};

use crate::persistence::persist;
use crate::{AppError, AppState, Written};

/// Marks one of the caller's own notifications read. Someone else's
/// notification is reported as not found.
pub async fn mark_read(
    state: &AppState,
    actor: &User,
    id: NotificationId,
) -> Result<Written<Notification>, AppError> {
    let mut ledger = state.ledger.write().await;
    let notification = ledger.mark_notification_read(id, &actor.id)?;
    let durability = persist(state, &ledger).await;
    debug!("notification {} read by {}", id, actor.id);
    Ok(Written::new(notification, durability))
}

pub async fn mark_all_read(state: &AppState, actor: &User) -> Result<Written<usize>, AppError> {
    let mut ledger = state.ledger.write().await;
    let changed = ledger.mark_all_notifications_read(&actor.id);
    let durability = persist(state, &ledger).await;
    debug!("{} notifications marked read for {}", changed, actor.id);
    Ok(Written::new(changed, durability))
}
