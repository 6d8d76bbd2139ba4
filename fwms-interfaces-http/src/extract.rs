// Rejection mapping so malformed input gets the same JSON error body as
// every other failure.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::Json;
use uuid::Uuid;

use crate::error::HttpError;

pub fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))
}

pub fn query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, HttpError> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))
}

pub fn id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, HttpError> {
    path.map(|Path(value)| value)
        .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))
}
