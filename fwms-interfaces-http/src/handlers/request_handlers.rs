use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use fwms_application::commands::request_commands;
use fwms_application::queries::request_queries;
use fwms_application::AppState;
use fwms_domain::{CreateRequestPayload, PickupRequest, RequestId, RequestQuery};

use crate::error::HttpError;
use crate::extract;
use crate::middleware::authorize;
use crate::response::WrittenResponse;

pub async fn list_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<RequestQuery>, QueryRejection>,
) -> Result<Json<Vec<PickupRequest>>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let query = extract::query(query)?;
    let requests = request_queries::list_requests(&state, &caller, query).await?;
    Ok(Json(requests))
}

pub async fn create_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateRequestPayload>, JsonRejection>,
) -> Result<WrittenResponse<PickupRequest>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let payload = extract::body(payload)?;
    let written = request_commands::create_request(&state, &caller, payload).await?;
    Ok(WrittenResponse::created(written))
}

pub async fn approve_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<WrittenResponse<PickupRequest>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let id = RequestId::from(extract::id(path)?);
    let written = request_commands::approve_request(&state, &caller, id).await?;
    Ok(WrittenResponse::ok(written))
}

pub async fn reject_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<WrittenResponse<PickupRequest>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let id = RequestId::from(extract::id(path)?);
    let written = request_commands::reject_request(&state, &caller, id).await?;
    Ok(WrittenResponse::ok(written))
}
