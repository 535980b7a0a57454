use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// Results in 401 Unauthorized.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in 401 Unauthorized.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Unknown email or wrong password during login.
    ///
    /// The two cases are indistinguishable to the client. Results in 401 Unauthorized.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The old password supplied while changing password did not verify.
    ///
    /// Results in 400 Bad Request.
    #[error("Old password is incorrect for user {0}")]
    IncorrectPassword(i32),

    /// The user is logged in but lacks a required permission.
    ///
    /// Results in 403 Forbidden.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Details are logged at debug level while the client-facing messages stay generic.
///
/// # Returns
/// - 400 Bad Request - For `IncorrectPassword`
/// - 401 Unauthorized - For missing sessions, stale sessions and bad credentials
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "You must be logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::IncorrectPassword(_) => (StatusCode::BAD_REQUEST, "Old password is incorrect"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
