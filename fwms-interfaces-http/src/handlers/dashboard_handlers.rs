use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use fwms_application::commands::notification_commands;
use fwms_application::queries::{
    activity_queries, notification_queries, points_queries, stats_queries,
};
use fwms_application::AppState;
use fwms_domain::{
    ActivityQuery, ActivityRecord, ImpactStats, Notification, NotificationId, NotificationQuery,
    OrganizationPoints, PointsSummary,
};

use crate::error::HttpError;
use crate::extract;
use crate::middleware::authorize;
use crate::response::WrittenResponse;

#[derive(Serialize)]
pub struct MarkedRead {
    pub marked: usize,
}

pub async fn points_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<PointsSummary>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    Ok(Json(points_queries::summary(&state, &caller).await?))
}

pub async fn leaderboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<OrganizationPoints>>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    Ok(Json(points_queries::standings(&state, &caller).await?))
}

pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<NotificationQuery>, QueryRejection>,
) -> Result<Json<Vec<Notification>>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let query = extract::query(query)?;
    let items = notification_queries::list_notifications(&state, &caller, query).await?;
    Ok(Json(items))
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<WrittenResponse<Notification>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let id = NotificationId::from(extract::id(path)?);
    let written = notification_commands::mark_read(&state, &caller, id).await?;
    Ok(WrittenResponse::ok(written))
}

pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<WrittenResponse<MarkedRead>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let written = notification_commands::mark_all_read(&state, &caller).await?;
    Ok(WrittenResponse::ok(written.map(|marked| MarkedRead { marked })))
}

pub async fn list_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ActivityQuery>, QueryRejection>,
) -> Result<Json<Vec<ActivityRecord>>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let query = extract::query(query)?;
    let records = activity_queries::recent_activity(&state, &caller, query).await?;
    Ok(Json(records))
}

pub async fn impact_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ImpactStats>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    Ok(Json(stats_queries::impact(&state, &caller).await?))
}
