use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Check-out is not strictly after check-in.
    ///
    /// Raised before any store access. Results in 400 Bad Request.
    #[error("Check-out date {check_out} must be after check-in date {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// The booking references a user that does not exist. Results in 400 Bad Request.
    #[error("User {0} does not exist")]
    UnknownUser(i32),

    /// The booking references a cabin that does not exist. Results in 400 Bad Request.
    #[error("Cabin {0} does not exist")]
    UnknownCabin(i32),

    /// The booking references a service that does not exist. Results in 400 Bad Request.
    #[error("Service {0} does not exist")]
    UnknownService(i32),

    /// No booking with this id exists. Results in 404 Not Found.
    #[error("Booking {0} not found")]
    NotFound(i32),

    /// The requested dates overlap an existing booking of the cabin.
    ///
    /// Nothing is written when this is returned. Results in 409 Conflict.
    #[error("Cabin {cabin_id} is already booked between {check_in} and {check_out}")]
    Conflict {
        cabin_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidDateRange { .. }
            | Self::UnknownUser(_)
            | Self::UnknownCabin(_)
            | Self::UnknownService(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
