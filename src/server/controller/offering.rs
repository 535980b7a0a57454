use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        offering::{ServiceDto, ServiceRequestDto},
    },
    server::{
        controller::json_body,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::offering::OfferingParams,
        service::offering::OfferingService,
        state::AppState,
    },
};

/// Tag for grouping service offering endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

#[utoipa::path(
    get,
    path = "/services",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "All extra services", body = Vec<ServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let offerings = OfferingService::new(&state.db).get_all().await?;

    let dtos: Vec<ServiceDto> = offerings.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "The service", body = ServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let offering = OfferingService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(offering.into_dto())))
}

/// Add an extra service that bookings can include.
///
/// # Access Control
/// - `Staff` - Employees and administrators
#[utoipa::path(
    post,
    path = "/services",
    tag = SERVICE_TAG,
    request_body = ServiceRequestDto,
    responses(
        (status = 201, description = "Service created", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<ServiceRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = OfferingParams::from_dto(json_body(payload)?);
    let offering = OfferingService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(offering.into_dto())))
}
