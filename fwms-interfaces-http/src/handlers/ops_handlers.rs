use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tokio::time::{timeout, Duration};
use tracing::error;

use fwms_application::identity::require_cafe_role;
use fwms_application::AppState;
use fwms_domain::Role;

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(Serialize)]
struct ReadyStatus {
    status: &'static str,
    storage: &'static str,
}

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

/// 503 while the snapshot store is unreachable or the last write failed.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let storage = if state.snapshot_repo.is_durable() {
        "file"
    } else {
        "memory"
    };
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let status = match timeout(Duration::from_secs(timeout_secs), state.snapshot_repo.ping()).await
    {
        Ok(Ok(())) if state.metrics.storage_degraded() => {
            error!("ready check failed: last snapshot write failed");
            "degraded"
        }
        Ok(Ok(())) => "ok",
        Ok(Err(err)) => {
            error!("ready check failed: {}", err);
            "error"
        }
        Err(_) => {
            error!("ready check timeout after {}s", timeout_secs);
            "timeout"
        }
    };
    let code = if status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(ReadyStatus { status, storage }))
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let caller = authorize(&state, &headers).await?;
    require_cafe_role(&caller, &[Role::Admin])?;
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    Ok((headers, payload))
}
