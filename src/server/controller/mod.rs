//! HTTP request handlers.
//!
//! Controllers extract request data, check access through `AuthGuard`, convert DTOs to
//! server models, call a service and convert the result back into a DTO. Malformed
//! bodies and query strings are reported as `400 Bad Request` with the usual error body.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    Json,
};

use crate::server::error::AppError;

pub mod auth;
pub mod booking;
pub mod cabin;
pub mod offering;
pub mod user;

/// Unwraps a JSON body, turning any rejection into a bad request.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwraps query parameters, turning any rejection into a bad request.
pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
