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
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        cabin::{CabinDto, CabinRequestDto},
    },
    server::{
        controller::{json_body, query_params},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            booking::DateRange,
            cabin::{Cabin, CabinFilter, CabinParams},
        },
        service::cabin::CabinService,
        state::AppState,
    },
};

/// Tag for grouping cabin endpoints in OpenAPI documentation
pub static CABIN_TAG: &str = "cabin";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CabinSearchParams {
    /// Part of the cabin name, case-insensitive
    pub name: Option<String>,
    /// Minimum number of guests
    pub capacity: Option<i32>,
    /// Highest nightly price in minor currency units
    pub max_price: Option<i64>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StayParams {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

fn cabin_dtos(cabins: Vec<Cabin>) -> Vec<CabinDto> {
    cabins.into_iter().map(|c| c.into_dto()).collect()
}

/// Search the cabin catalog.
///
/// All criteria are optional and combine; results are ordered by name.
#[utoipa::path(
    get,
    path = "/cabins",
    tag = CABIN_TAG,
    params(CabinSearchParams),
    responses(
        (status = 200, description = "Matching cabins", body = Vec<CabinDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cabins(
    State(state): State<AppState>,
    query: Result<Query<CabinSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;

    let cabins = CabinService::new(&state.db)
        .search(CabinFilter {
            name: query.name.filter(|name| !name.trim().is_empty()),
            min_capacity: query.capacity,
            max_price: query.max_price,
        })
        .await?;

    Ok((StatusCode::OK, Json(cabin_dtos(cabins))))
}

/// List cabins free for a whole stay.
///
/// # Returns
/// - `200 OK` - Cabins with no active booking overlapping the stay
/// - `400 Bad Request` - Missing dates, or check-out not after check-in
#[utoipa::path(
    get,
    path = "/cabins/available",
    tag = CABIN_TAG,
    params(StayParams),
    responses(
        (status = 200, description = "Available cabins", body = Vec<CabinDto>),
        (status = 400, description = "Invalid dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_cabins(
    State(state): State<AppState>,
    query: Result<Query<StayParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;
    let range = DateRange::new(query.check_in, query.check_out)?;

    let cabins = CabinService::new(&state.db)
        .get_available(range, &state.availability_policy)
        .await?;

    Ok((StatusCode::OK, Json(cabin_dtos(cabins))))
}

#[utoipa::path(
    get,
    path = "/cabins/{id}",
    tag = CABIN_TAG,
    params(("id" = i32, Path, description = "Cabin ID")),
    responses(
        (status = 200, description = "The cabin", body = CabinDto),
        (status = 404, description = "Cabin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cabin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cabin = CabinService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(cabin.into_dto())))
}

/// Add a cabin to the catalog.
///
/// # Access Control
/// - `Staff` - Employees and administrators
#[utoipa::path(
    post,
    path = "/cabins",
    tag = CABIN_TAG,
    request_body = CabinRequestDto,
    responses(
        (status = 201, description = "Cabin created", body = CabinDto),
        (status = 400, description = "Invalid cabin data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cabin(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CabinRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CabinParams::from_dto(json_body(payload)?);
    let cabin = CabinService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(cabin.into_dto())))
}

/// Replace the details of a cabin.
///
/// # Access Control
/// - `Staff` - Employees and administrators
#[utoipa::path(
    put,
    path = "/cabins/{id}",
    tag = CABIN_TAG,
    params(("id" = i32, Path, description = "Cabin ID")),
    request_body = CabinRequestDto,
    responses(
        (status = 204, description = "Cabin updated"),
        (status = 400, description = "Invalid cabin data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Cabin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cabin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    payload: Result<Json<CabinRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CabinParams::from_dto(json_body(payload)?);
    CabinService::new(&state.db).update(id, params).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a cabin and all of its bookings.
///
/// # Access Control
/// - `Staff` - Employees and administrators
#[utoipa::path(
    delete,
    path = "/cabins/{id}",
    tag = CABIN_TAG,
    params(("id" = i32, Path, description = "Cabin ID")),
    responses(
        (status = 204, description = "Cabin deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Cabin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cabin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    CabinService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
