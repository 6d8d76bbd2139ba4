use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use fwms_application::commands::waste_commands;
use fwms_application::queries::{marketplace_queries, waste_queries};
use fwms_application::AppState;
use fwms_domain::{LogWastePayload, MarketplaceQuery, WasteEntry, WasteEntryId, WasteQuery};

use crate::error::HttpError;
use crate::extract;
use crate::middleware::authorize;
use crate::response::WrittenResponse;

pub async fn list_waste(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<WasteQuery>, QueryRejection>,
) -> Result<Json<Vec<WasteEntry>>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let query = extract::query(query)?;
    let entries = waste_queries::list_waste(&state, &caller, query).await?;
    Ok(Json(entries))
}

pub async fn get_waste(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<WasteEntry>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let id = WasteEntryId::from(extract::id(path)?);
    let entry = waste_queries::get_waste(&state, &caller, id).await?;
    Ok(Json(entry))
}

pub async fn log_waste(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LogWastePayload>, JsonRejection>,
) -> Result<WrittenResponse<WasteEntry>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let payload = extract::body(payload)?;
    let written = waste_commands::log_waste(&state, &caller, payload).await?;
    Ok(WrittenResponse::created(written))
}

pub async fn drop_waste(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<WrittenResponse<WasteEntry>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let id = WasteEntryId::from(extract::id(path)?);
    let written = waste_commands::mark_dropped(&state, &caller, id).await?;
    Ok(WrittenResponse::ok(written))
}

pub async fn marketplace(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<MarketplaceQuery>, QueryRejection>,
) -> Result<Json<Vec<WasteEntry>>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let query = extract::query(query)?;
    let entries = marketplace_queries::browse(&state, &caller, query).await?;
    Ok(Json(entries))
}
