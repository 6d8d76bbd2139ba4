use axum::http::HeaderMap;

use fwms_application::identity;
use fwms_application::AppState;
use fwms_domain::User;

use crate::error::HttpError;

pub const CALLER_HEADER: &str = "x-user-id";

pub fn caller_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CALLER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Resolves the `x-user-id` header to a known user.
pub async fn authorize(state: &AppState, headers: &HeaderMap) -> Result<User, HttpError> {
    Ok(identity::authenticate(state, caller_id(headers)).await?)
}
