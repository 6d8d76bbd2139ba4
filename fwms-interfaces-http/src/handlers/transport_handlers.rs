use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use fwms_application::commands::transport_commands;
use fwms_application::queries::transport_queries;
use fwms_application::AppState;
use fwms_domain::{
    Completion, ScheduleTransportPayload, TransportId, TransportPatch, TransportQuery,
    Transportation,
};

use crate::error::HttpError;
use crate::extract;
use crate::middleware::authorize;
use crate::response::WrittenResponse;

pub async fn list_transport(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<TransportQuery>, QueryRejection>,
) -> Result<Json<Vec<Transportation>>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let query = extract::query(query)?;
    let records = transport_queries::list_transport(&state, &caller, query).await?;
    Ok(Json(records))
}

pub async fn get_transport(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Transportation>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let id = TransportId::from(extract::id(path)?);
    let record = transport_queries::get_transport(&state, &caller, id).await?;
    Ok(Json(record))
}

pub async fn schedule_transport(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ScheduleTransportPayload>, JsonRejection>,
) -> Result<WrittenResponse<Transportation>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let payload = extract::body(payload)?;
    let written = transport_commands::schedule_transport(&state, &caller, payload).await?;
    Ok(WrittenResponse::created(written))
}

pub async fn update_transport(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<TransportPatch>, JsonRejection>,
) -> Result<WrittenResponse<Transportation>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let id = TransportId::from(extract::id(path)?);
    let patch = extract::body(payload)?;
    let written = transport_commands::update_transport(&state, &caller, id, patch).await?;
    Ok(WrittenResponse::ok(written))
}

pub async fn complete_transport(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<WrittenResponse<Completion>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let id = TransportId::from(extract::id(path)?);
    let written = transport_commands::complete_transport(&state, &caller, id).await?;
    Ok(WrittenResponse::ok(written))
}

pub async fn delete_transport(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<WrittenResponse<Transportation>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let id = TransportId::from(extract::id(path)?);
    let written = transport_commands::delete_transport(&state, &caller, id).await?;
    Ok(WrittenResponse::ok(written))
}
