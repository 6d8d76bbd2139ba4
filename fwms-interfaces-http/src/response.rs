use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use fwms_application::Written;

pub const DURABILITY_HEADER: &str = "x-fwms-durability";

/// Mutation response: `{"data": ..., "durability": ...}` plus the durability
/// header.
pub struct WrittenResponse<T> {
    status: StatusCode,
    written: Written<T>,
}

impl<T> WrittenResponse<T> {
    pub fn ok(written: Written<T>) -> Self {
        Self {
            status: StatusCode::OK,
            written,
        }
    }

    pub fn created(written: Written<T>) -> Self {
        Self {
            status: StatusCode::CREATED,
            written,
        }
    }
}

impl<T: Serialize> IntoResponse for WrittenResponse<T> {
    fn into_response(self) -> Response {
        let durability = HeaderValue::from_static(self.written.durability.as_str());
        (
            self.status,
            [(DURABILITY_HEADER, durability)],
            Json(self.written),
        )
            .into_response()
    }
}
