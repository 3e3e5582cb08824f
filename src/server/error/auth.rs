use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("You are not authorized")]
    MissingToken,

    /// Access token failed signature, format or expiry validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Caller's role is not on the allow-list for the requested route.
    #[error("Role '{role}' may not perform {action}")]
    AccessDenied {
        /// Role decoded from the token
        role: String,
        /// Resource and action that were refused
        action: String,
    },

    /// Sign-in password did not match the stored hash.
    #[error("Password is incorrect")]
    IncorrectPassword,

    /// Refresh token failed verification.
    #[error("Invalid Refresh Token")]
    InvalidRefreshToken(#[source] jsonwebtoken::errors::Error),

    /// Profile update attempted to change the caller's role.
    #[error("You can not change role")]
    RoleChangeForbidden,

    /// Token subject refers to a user that no longer exists.
    #[error("No user found with id {0}")]
    SubjectNotFound(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `SubjectNotFound` / `IncorrectPassword` → 401
/// - `AccessDenied` / `InvalidRefreshToken` / `RoleChangeForbidden` → 403
///
/// Token decoding details are logged at debug level and never returned to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "You are not authorized"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Self::SubjectNotFound(_) => (StatusCode::UNAUTHORIZED, "No user found with this id"),
            Self::IncorrectPassword => (StatusCode::UNAUTHORIZED, "Password is incorrect"),
            Self::AccessDenied { .. } => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::InvalidRefreshToken(_) => (StatusCode::FORBIDDEN, "Invalid Refresh Token"),
            Self::RoleChangeForbidden => (StatusCode::FORBIDDEN, "You can not change role"),
        };

        (status, Json(ErrorDto::new(status.as_u16(), message))).into_response()
    }
}
