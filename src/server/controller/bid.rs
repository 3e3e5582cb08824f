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
        bid::{BidDetailDto, BidDto, CreateBidDto, UpdateBidDto},
    },
    server::{
        data::bid::BID_QUERY,
        error::AppError,
        middleware::validation::{IdPath, ValidatedJson},
        model::bid::{BidDetail, PlaceBidParams, UpdateBidParams},
        query::ListQuery,
        service::bid::BidService,
        state::AppState,
    },
};

/// Tag for grouping bidding history endpoints in OpenAPI documentation
pub static BID_TAG: &str = "bidding history";

/// Place a bid on a product.
///
/// The amount is never taken from the client: it is always the product's current bidding
/// price plus its increment. On success every socket client receives a `bidUpdate` event
/// carrying the stored bid.
///
/// # Access Control
/// - `Admin`, `User`
///
/// # Returns
/// - `200 OK` - The recorded bid
/// - `404 Not Found` - Product does not exist
/// - `409 Conflict` - Too many competing bids, retry
#[utoipa::path(
    post,
    path = "/api/v1/abh",
    tag = BID_TAG,
    request_body = CreateBidDto,
    responses(
        (status = 200, description = "Bid placed", body = BidDetailDto),
        (status = 400, description = "Invalid bid data or unknown bidder", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 409, description = "Bid lost every retry against concurrent bids", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn place_bid(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let bid = BidService::new(&state.db, &state.events)
        .place(PlaceBidParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Auction bidding history created successfully",
            bid.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/abh",
    tag = BID_TAG,
    params(
        ("productId" = Option<i32>, Query, description = "Product ID"),
        ("bidderId" = Option<i32>, Query, description = "Bidder user ID"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sortable field (default: createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Matching bids", body = [BidDetailDto]),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 404, description = "No bid matched", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_bids(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery::parse(&params, &BID_QUERY)?;

    let page = BidService::new(&state.db, &state.events)
        .get_all(query)
        .await?;

    if page.is_empty() {
        return Err(AppError::NotFound(
            "No auction bidding history found!".to_string(),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(page.into_response(
            "Auction bidding history retrived successfully",
            BidDetail::into_dto,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/abh/{id}",
    tag = BID_TAG,
    params(("id" = i32, Path, description = "Bid ID")),
    responses(
        (status = 200, description = "Bid with product and bidder", body = BidDetailDto),
        (status = 404, description = "Bid not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_bid_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let bid = BidService::new(&state.db, &state.events)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Auction bidding history retrived successfully",
            bid.into_dto(),
        )),
    ))
}

/// Correct a recorded bid. The product's current price is not touched.
#[utoipa::path(
    patch,
    path = "/api/v1/abh/{id}",
    tag = BID_TAG,
    params(("id" = i32, Path, description = "Bid ID")),
    request_body = UpdateBidDto,
    responses(
        (status = 200, description = "Updated bid", body = BidDetailDto),
        (status = 404, description = "Bid not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_bid(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let bid = BidService::new(&state.db, &state.events)
        .update(id, UpdateBidParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Auction bidding history updated successfully",
            bid.into_dto(),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/abh/{id}",
    tag = BID_TAG,
    params(("id" = i32, Path, description = "Bid ID")),
    responses(
        (status = 200, description = "Deleted bid", body = BidDto),
        (status = 404, description = "Bid not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_bid(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let bid = BidService::new(&state.db, &state.events)
        .delete(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Auction bidding history deleted successfully",
            bid.into_dto(),
        )),
    ))
}

fn not_found() -> AppError {
    AppError::NotFound("No auction bidding history found with this id".to_string())
}
