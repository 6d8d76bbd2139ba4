use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use fwms_application::commands::user_commands;
use fwms_application::AppState;
use fwms_domain::{NewUser, User};

use crate::error::HttpError;
use crate::extract;
use crate::middleware::authorize;
use crate::response::WrittenResponse;

pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<User>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    Ok(Json(caller))
}

pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<WrittenResponse<User>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let payload = extract::body(payload)?;
    let written = user_commands::create_user(&state, &caller, payload).await?;
    Ok(WrittenResponse::created(written))
}
