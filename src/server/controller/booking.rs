use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        booking::{AvailabilityDto, BookingDto, BookingRequestDto},
    },
    server::{
        controller::{json_body, query_params},
        error::AppError,
        model::booking::{BookingFilter, BookingParams},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BookingListParams {
    /// Only bookings of this cabin
    pub cabin_id: Option<i32>,
    /// Only bookings of this user
    pub user_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvailabilityParams {
    pub cabin_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Booking to ignore, e.g. the one being edited
    pub exclude_booking_id: Option<i32>,
}

fn booking_service(state: &AppState) -> BookingService<'_> {
    BookingService::new(
        &state.db,
        &state.cabin_locks,
        &state.availability_policy,
    )
}

/// Create a booking.
///
/// Stores the booking if the cabin has no overlapping booking for the requested
/// dates. Check-out must be after check-in, and the referenced user, cabin and
/// services must exist.
///
/// # Returns
/// - `201 Created` - The stored booking
/// - `400 Bad Request` - Malformed body, invalid dates or unknown references
/// - `409 Conflict` - The cabin is already booked for some of the dates
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    request_body = BookingRequestDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 409, description = "Cabin already booked for these dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = BookingParams::from_dto(json_body(payload)?);

    let booking = booking_service(&state).create(params).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// List bookings ordered by check-in date.
///
/// # Returns
/// - `200 OK` - Bookings matching the optional cabin and user filters
/// - `400 Bad Request` - Malformed query
#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(BookingListParams),
    responses(
        (status = 200, description = "Bookings", body = Vec<BookingDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    query: Result<Query<BookingListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;

    let bookings = booking_service(&state)
        .get_all(BookingFilter {
            cabin_id: query.cabin_id,
            user_id: query.user_id,
        })
        .await?;

    let dtos: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Check whether a cabin is free for a date range.
///
/// Dates are not validated. A cabin without bookings is always available; a range
/// with check-out on or before check-in is still unavailable when an existing
/// booking covers its check-in date.
#[utoipa::path(
    get,
    path = "/bookings/availability",
    tag = BOOKING_TAG,
    params(AvailabilityParams),
    responses(
        (status = 200, description = "Availability of the cabin", body = AvailabilityDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_availability(
    State(state): State<AppState>,
    query: Result<Query<AvailabilityParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;

    let available = booking_service(&state)
        .is_available(
            query.cabin_id,
            query.check_in,
            query.check_out,
            query.exclude_booking_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(AvailabilityDto { available })))
}

#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking = booking_service(&state).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Replace a booking.
///
/// Every field is replaced, including the attached services. The booking's own
/// dates never conflict with the update.
///
/// # Returns
/// - `204 No Content` - Booking updated
/// - `400 Bad Request` - Malformed body, invalid dates or unknown references
/// - `404 Not Found` - No booking with this id
/// - `409 Conflict` - Another booking occupies some of the new dates
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = BookingRequestDto,
    responses(
        (status = 204, description = "Booking updated"),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Cabin already booked for these dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<BookingRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = BookingParams::from_dto(json_body(payload)?);

    booking_service(&state).update(id, params).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    booking_service(&state).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
