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
        auction_winner::{
            AuctionWinnerDetailDto, AuctionWinnerDto, CreateAuctionWinnerDto,
            UpdateAuctionWinnerDto,
        },
    },
    server::{
        data::auction_winner::AUCTION_WINNER_QUERY,
        error::AppError,
        middleware::validation::{IdPath, ValidatedJson},
        model::auction_winner::{
            AuctionWinnerDetail, CreateAuctionWinnerParams, UpdateAuctionWinnerParams,
        },
        query::ListQuery,
        service::auction_winner::AuctionWinnerService,
        state::AppState,
    },
};

/// Tag for grouping auction winner endpoints in OpenAPI documentation
pub static AUCTION_WINNER_TAG: &str = "auction winner";

/// Record the winner of a product's auction.
///
/// Each product can have at most one winner. No payment is created; the response carries
/// an empty `payment` until one is recorded.
///
/// # Access Control
/// - `Admin`, `User`
#[utoipa::path(
    post,
    path = "/api/v1/auction-winner",
    tag = AUCTION_WINNER_TAG,
    request_body = CreateAuctionWinnerDto,
    responses(
        (status = 200, description = "Winner recorded", body = AuctionWinnerDetailDto),
        (status = 400, description = "Unknown product or user", body = ErrorDto),
        (status = 409, description = "Product already has a winner", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_auction_winner(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAuctionWinnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let winner = AuctionWinnerService::new(&state.db)
        .create(CreateAuctionWinnerParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Auction Winner created successfully",
            winner.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auction-winner",
    tag = AUCTION_WINNER_TAG,
    params(
        ("productId" = Option<i32>, Query, description = "Product ID"),
        ("auctionWinnerId" = Option<i32>, Query, description = "Winning user ID"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sortable field (default: createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Matching winners", body = [AuctionWinnerDetailDto]),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 404, description = "No winner matched", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_auction_winners(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery::parse(&params, &AUCTION_WINNER_QUERY)?;

    let page = AuctionWinnerService::new(&state.db).get_all(query).await?;

    if page.is_empty() {
        return Err(AppError::NotFound("No Auction Winner found!".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(page.into_response(
            "Auction winner retrived successfully",
            AuctionWinnerDetail::into_dto,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auction-winner/{id}",
    tag = AUCTION_WINNER_TAG,
    params(("id" = i32, Path, description = "Auction winner ID")),
    responses(
        (status = 200, description = "Winner with product, user and payment", body = AuctionWinnerDetailDto),
        (status = 404, description = "Auction winner not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_auction_winner_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let winner = AuctionWinnerService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Auction winner retrived successfully",
            winner.into_dto(),
        )),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/auction-winner/{id}",
    tag = AUCTION_WINNER_TAG,
    params(("id" = i32, Path, description = "Auction winner ID")),
    request_body = UpdateAuctionWinnerDto,
    responses(
        (status = 200, description = "Updated winner", body = AuctionWinnerDetailDto),
        (status = 404, description = "Auction winner not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_auction_winner(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateAuctionWinnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let winner = AuctionWinnerService::new(&state.db)
        .update(id, UpdateAuctionWinnerParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Auction winner updated successfully",
            winner.into_dto(),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/auction-winner/{id}",
    tag = AUCTION_WINNER_TAG,
    params(("id" = i32, Path, description = "Auction winner ID")),
    responses(
        (status = 200, description = "Deleted winner", body = AuctionWinnerDto),
        (status = 404, description = "Auction winner not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_auction_winner(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let winner = AuctionWinnerService::new(&state.db)
        .delete(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Auction winner deleted successfully",
            winner.into_dto(),
        )),
    ))
}

fn not_found() -> AppError {
    AppError::NotFound("No auction winner found with this id".to_string())
}
