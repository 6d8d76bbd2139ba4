use chrono::Utc;
use tracing::info;

use fwms_domain::{NewUser, Role, User};

use crate::identity::require_cafe_role;
use crate::persistence::persist;
use crate::{AppError, AppState, Written};

pub async fn create_user(
    state: &AppState,
    actor: &User,
    payload: NewUser,
) -> Result<Written<User>, AppError> {
    require_cafe_role(actor, &[Role::Admin])?;
    if payload.role.is_cafe_side()
        && payload
            .cafe_id
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty()
    {
        return Err(AppError::BadRequest(format!(
            "cafe_id is required for {} users",
            payload.role
        )));
    }

    let mut ledger = state.ledger.write().await;
    let user = ledger.add_user(payload, &actor.id, Utc::now())?;
    let durability = persist(state, &ledger).await;
    info!("user {} created with role {}", user.id, user.role);
    Ok(Written::new(user, durability))
}
