//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. It wraps the
//! domain-specific errors and implements `IntoResponse`, rendering every failure in the
//! standard error envelope.

pub mod auth;
pub mod config;
pub mod query;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorMessageDto},
    server::error::{auth::AuthError, config::ConfigError, query::QueryError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejected list query parameters. Always 400.
    #[error(transparent)]
    QueryErr(#[from] QueryError),

    /// Database operation error from SeaORM.
    ///
    /// Unique violations map to 409, foreign key violations to 400, anything else to 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing or verification failure.
    #[error(transparent)]
    PasswordErr(#[from] bcrypt::BcryptError),

    /// Failure to sign a JWT.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Blocking task panicked or was cancelled.
    #[error(transparent)]
    JoinErr(#[from] tokio::task::JoinError),

    /// I/O failure while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with current state. Results in 409 with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Request body failed validation. Results in 400 listing every field error.
    #[error("Validation Error")]
    Validation(Vec<ErrorMessageDto>),

    /// Internal server error with custom message.
    ///
    /// The message is logged and a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`, `Validation`, `QueryErr` and foreign key violations
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict` and unique constraint violations
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::QueryErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(400, "Validation Error").with_errors(errors)),
            )
                .into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    error_response(StatusCode::CONFLICT, "Record already exists")
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!("Foreign key violation: {}", detail);
                    error_response(StatusCode::BAD_REQUEST, "Referenced record does not exist")
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorDto::new(status.as_u16(), message))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
