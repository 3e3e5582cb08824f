use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ErrorMessageDto};

/// Rejected list query parameters.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown query parameter: {0}")]
    UnknownParameter(String),

    #[error("Query parameter {param} must be an integer, got '{value}'")]
    InvalidNumber { param: String, value: String },

    #[error("Query parameter {param} must be one of [{allowed}], got '{value}'")]
    InvalidChoice {
        param: String,
        value: String,
        allowed: String,
    },

    #[error("Query parameter {0} must be at least 1")]
    BelowMinimum(String),

    #[error("Cannot sort by '{0}'")]
    UnsortableField(String),
}

impl QueryError {
    /// Query parameter the error refers to.
    pub fn param(&self) -> &str {
        match self {
            Self::UnknownParameter(param)
            | Self::BelowMinimum(param)
            | Self::InvalidNumber { param, .. }
            | Self::InvalidChoice { param, .. } => param,
            Self::UnsortableField(_) => "sortBy",
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let errors = vec![ErrorMessageDto {
            path: self.param().to_string(),
            message: self.to_string(),
        }];

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto::new(400, "Invalid query parameters").with_errors(errors)),
        )
            .into_response()
    }
}
