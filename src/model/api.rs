use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard success envelope wrapping every response body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub success: bool,
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaDto>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Builds a `200 OK` envelope around `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: 200,
            success: true,
            status: "success".to_string(),
            message: message.into(),
            meta: None,
            data,
        }
    }

    pub fn with_meta(mut self, meta: MetaDto) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Pagination metadata attached to list responses.
///
/// `total` counts the rows matching the request's filters, not the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetaDto {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// A single field-level error reported alongside a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessageDto {
    pub path: String,
    pub message: String,
}

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub status_code: u16,
    pub success: bool,
    pub status: String,
    pub message: String,
    pub error_messages: Vec<ErrorMessageDto>,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl ErrorDto {
    /// Builds an error envelope whose only error message repeats `message` at the root path.
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status_code,
            success: false,
            status: "error".to_string(),
            error_messages: vec![ErrorMessageDto {
                path: String::new(),
                message: message.clone(),
            }],
            message,
            data: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<ErrorMessageDto>) -> Self {
        self.error_messages = errors;
        self
    }
}
