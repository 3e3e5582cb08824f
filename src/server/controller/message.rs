use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        message::{CreateMessageDto, MessageDetailDto, MessageDto, UpdateMessageDto},
    },
    server::{
        data::message::MESSAGE_QUERY,
        error::AppError,
        middleware::validation::{IdPath, ValidatedJson},
        model::message::{CreateMessageParams, MessageDetail, UpdateMessageParams},
        query::ListQuery,
        service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping product message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Post a message on a product's discussion thread.
///
/// Live delivery to other viewers goes through the `messageRoom` socket event; this
/// endpoint only persists the message.
///
/// # Access Control
/// - `Admin`, `User`
#[utoipa::path(
    post,
    path = "/api/v1/message",
    tag = MESSAGE_TAG,
    request_body = CreateMessageDto,
    responses(
        (status = 200, description = "Message stored", body = MessageDto),
        (status = 400, description = "Invalid message or unknown product/sender", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = MessageService::new(&state.db)
        .create(CreateMessageParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Message created successfully",
            message.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/message",
    tag = MESSAGE_TAG,
    params(
        ("searchTerm" = Option<String>, Query, description = "Substring matched against the content"),
        ("productId" = Option<i32>, Query, description = "Product ID"),
        ("senderId" = Option<i32>, Query, description = "Sender user ID"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sortable field (default: createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Matching messages", body = [MessageDetailDto]),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 404, description = "No message matched", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_messages(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery::parse(&params, &MESSAGE_QUERY)?;

    let page = MessageService::new(&state.db).get_all(query).await?;

    if page.is_empty() {
        return Err(AppError::NotFound("No message found!".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(page.into_response("Message retrived successfully", MessageDetail::into_dto)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/message/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message with product and sender", body = MessageDetailDto),
        (status = 404, description = "Message not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_message_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let message = MessageService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Message retrived successfully",
            message.into_dto(),
        )),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/message/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message ID")),
    request_body = UpdateMessageDto,
    responses(
        (status = 200, description = "Updated message", body = MessageDetailDto),
        (status = 404, description = "Message not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_message(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = MessageService::new(&state.db)
        .update(id, UpdateMessageParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Message updated successfully",
            message.into_dto(),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/message/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Deleted message", body = MessageDto),
        (status = 404, description = "Message not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_message(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let message = MessageService::new(&state.db)
        .delete(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Message deleted successfully",
            message.into_dto(),
        )),
    ))
}

fn not_found() -> AppError {
    AppError::NotFound("No message found with this id".to_string())
}
