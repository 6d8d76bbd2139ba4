// Caller identity and role checks.
// The x-user-id header is trusted as-is; there is no credential verification.

use fwms_domain::{CafeId, Role, User, UserId};

use crate::{AppError, AppState};

pub async fn authenticate(state: &AppState, caller_id: Option<&str>) -> Result<User, AppError> {
    let caller_id = caller_id
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(AppError::Unauthorized)?;
    let ledger = state.ledger.read().await;
    ledger
        .user(&UserId::new(caller_id))
        .cloned()
        .ok_or(AppError::Unauthorized)
}

pub fn require_role(user: &User, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "role '{}' may not perform this action",
            user.role
        )))
    }
}

/// Admin and staff actions require a café association.
pub fn require_cafe(user: &User) -> Result<&CafeId, AppError> {
    user.cafe_id
        .as_ref()
        .ok_or_else(|| AppError::Forbidden("no organization assigned".to_string()))
}

/// Role gate for admin and staff operations, which also need a café association.
pub fn require_cafe_role<'a>(user: &'a User, allowed: &[Role]) -> Result<&'a CafeId, AppError> {
    require_role(user, allowed)?;
    require_cafe(user)
}

/// Staff act only on their own café; admins act on every café.
pub fn ensure_cafe_scope(user: &User, cafe_id: &CafeId) -> Result<(), AppError> {
    let own = require_cafe(user)?;
    if user.role == Role::Admin || own == cafe_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "café '{}' belongs to another organization",
            cafe_id
        )))
    }
}
