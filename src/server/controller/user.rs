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
        booking::BookingDto,
        user::{ChangePasswordDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::json_body,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{
            booking::BookingFilter,
            user::{Role, UpdateUserParams, User},
        },
        service::{auth::AuthService, booking::BookingService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

fn user_dtos(users: Vec<User>) -> Vec<UserDto> {
    users.into_iter().map(|u| u.into_dto()).collect()
}

/// List client accounts.
///
/// # Access Control
/// - `Staff` - Employees and administrators
#[utoipa::path(
    get,
    path = "/users/clients",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Client accounts", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let users = UserService::new(&state.db).get_clients().await?;

    Ok((StatusCode::OK, Json(user_dtos(users))))
}

/// List employee accounts.
///
/// # Access Control
/// - `Admin` - Administrators only
#[utoipa::path(
    get,
    path = "/users/employees",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Employee accounts", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_employees().await?;

    Ok((StatusCode::OK, Json(user_dtos(users))))
}

/// Get a user's profile.
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an administrator
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to view this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::OwnerOrAdmin(id)])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's profile.
///
/// Changing the role additionally requires an administrator.
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an administrator
/// - `Admin` - When `role` is given
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Invalid data or email in use", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to update this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;

    let role = payload
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let mut permissions = vec![Permission::OwnerOrAdmin(id)];
    if role.is_some() {
        permissions.push(Permission::Admin);
    }

    let _ = AuthGuard::new(&state.db, &session)
        .require(&permissions)
        .await?;

    UserService::new(&state.db)
        .update(UpdateUserParams {
            id,
            name: payload.name,
            email: payload.email,
            role,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change a user's password.
///
/// # Access Control
/// - `Owner` - Only the user themselves
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - Old password incorrect or new password too short
#[utoipa::path(
    put,
    path = "/users/{id}/password",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Old password incorrect or new password invalid", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to change this password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    payload: Result<Json<ChangePasswordDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(id)])
        .await?;

    AuthService::new(&state.db)
        .change_password(id, payload.old_password, payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user account together with its bookings.
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an administrator
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::OwnerOrAdmin(id)])
        .await?;

    UserService::new(&state.db).delete(id).await?;

    if current_user.id == id {
        AuthSession::new(&session).flush().await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List a user's bookings ordered by check-in date.
///
/// # Access Control
/// - `OwnerOrStaff` - The user themselves, employees and administrators
#[utoipa::path(
    get,
    path = "/users/{id}/bookings",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's bookings", body = Vec<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to view these bookings", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::OwnerOrStaff(id)])
        .await?;

    // 404 for unknown users rather than an empty list
    UserService::new(&state.db).get_by_id(id).await?;

    let bookings = BookingService::new(
        &state.db,
        &state.cabin_locks,
        &state.availability_policy,
    )
    .get_all(BookingFilter {
        cabin_id: None,
        user_id: Some(id),
    })
    .await?;

    let dtos: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
