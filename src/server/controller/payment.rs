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
        payment::{CreatePaymentDto, PaymentDetailDto, PaymentDto, UpdatePaymentDto},
    },
    server::{
        data::payment::PAYMENT_QUERY,
        error::AppError,
        middleware::validation::{IdPath, ValidatedJson},
        model::payment::{CreatePaymentParams, PaymentDetail, UpdatePaymentParams},
        query::ListQuery,
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Record a payment against an auction winner.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/v1/payment",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 200, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Invalid payment data or unknown auction winner", body = ErrorDto),
        (status = 409, description = "Winner already has a payment", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_payment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db)
        .create(CreatePaymentParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Payment created successfully",
            payment.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/payment",
    tag = PAYMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sortable field (default: createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Payments", body = [PaymentDetailDto]),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 404, description = "No payment matched", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_payments(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery::parse(&params, &PAYMENT_QUERY)?;

    let page = PaymentService::new(&state.db).get_all(query).await?;

    if page.is_empty() {
        return Err(AppError::NotFound("No payment found!".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(page.into_response("Payment retrived successfully", PaymentDetail::into_dto)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/payment/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment with its auction winner", body = PaymentDetailDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_payment_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Payment retrived successfully",
            payment.into_dto(),
        )),
    ))
}

/// Update a payment, typically to attach the transaction id once the provider confirms.
///
/// # Access Control
/// - `Admin`, `User`
#[utoipa::path(
    patch,
    path = "/api/v1/payment/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = UpdatePaymentDto,
    responses(
        (status = 200, description = "Updated payment", body = PaymentDetailDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_payment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db)
        .update(id, UpdatePaymentParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Payment updated successfully",
            payment.into_dto(),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/payment/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Deleted payment", body = PaymentDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db)
        .delete(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Payment deleted successfully",
            payment.into_dto(),
        )),
    ))
}

fn not_found() -> AppError {
    AppError::NotFound("No payment found with this id".to_string())
}
