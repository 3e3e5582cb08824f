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
        product::{CreateProductDto, ProductDetailDto, UpdateProductDto},
    },
    server::{
        data::product::PRODUCT_QUERY,
        error::AppError,
        middleware::validation::{IdPath, ValidatedJson},
        model::product::{CreateProductParams, ProductDetail, UpdateProductParams},
        query::ListQuery,
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// List a new product for auction.
///
/// The auction starts as `not_started` and the current bidding price starts at the
/// initial price unless the payload sets either explicitly.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Created product
/// - `400 Bad Request` - Invalid payload, or category/owner does not exist
#[utoipa::path(
    post,
    path = "/api/v1/product",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 200, description = "Successfully created product", body = ProductDetailDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .create(CreateProductParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Product created successfully",
            product.into_dto(),
        )),
    ))
}

/// List products.
///
/// Supports `searchTerm` over the product name, exact `auctionStatus` and
/// `productOwnerId`, a `categoryId` relation filter and a `minPrice`/`maxPrice` range
/// over the current bidding price.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/product",
    tag = PRODUCT_TAG,
    params(
        ("searchTerm" = Option<String>, Query, description = "Substring matched against the product name"),
        ("auctionStatus" = Option<String>, Query, description = "not_started, ongoing or end"),
        ("productOwnerId" = Option<i32>, Query, description = "Owner user ID"),
        ("categoryId" = Option<i32>, Query, description = "Category ID"),
        ("minPrice" = Option<i64>, Query, description = "Lowest current bidding price"),
        ("maxPrice" = Option<i64>, Query, description = "Highest current bidding price"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sortable field (default: createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Matching products", body = [ProductDetailDto]),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 404, description = "No product matched", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery::parse(&params, &PRODUCT_QUERY)?;

    let page = ProductService::new(&state.db).get_all(query).await?;

    if page.is_empty() {
        return Err(AppError::NotFound("No product found!".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(page.into_response("Product retrived successfully", ProductDetail::into_dto)),
    ))
}

/// Get a product with its category, owner, winner, bids and messages.
///
/// Bids are ordered from highest to lowest amount.
#[utoipa::path(
    get,
    path = "/api/v1/product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product with relations", body = ProductDetailDto),
        (status = 400, description = "Non-numeric id", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Product retrived successfully",
            product.into_dto(),
        )),
    ))
}

/// List every product of a category.
#[utoipa::path(
    get,
    path = "/api/v1/product/{id}/category",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Products of the category", body = [ProductDetailDto]),
        (status = 404, description = "Category has no products", body = ErrorDto)
    ),
)]
pub async fn get_products_by_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db)
        .get_by_category(category_id)
        .await?;

    if products.is_empty() {
        return Err(AppError::NotFound(
            "No products found for the specified category".to_string(),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Product retrived successfully",
            products
                .into_iter()
                .map(ProductDetail::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Updated product", body = ProductDetailDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .update(id, UpdateProductParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Product updated successfully",
            product.into_dto(),
        )),
    ))
}

/// Delete a product along with its bids, messages and winner record.
#[utoipa::path(
    delete,
    path = "/api/v1/product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted product", body = ProductDetailDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .delete(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Product deleted successfully",
            product.into_dto(),
        )),
    ))
}

/// Open bidding on a product.
///
/// The status is overwritten regardless of its current value, so an ended auction can be
/// reopened.
#[utoipa::path(
    patch,
    path = "/api/v1/product/start-bidding/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Bidding started", body = ProductDetailDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn start_bidding(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .start_bidding(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Bidding start", product.into_dto())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/product/end-bidding/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Bidding ended", body = ProductDetailDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn end_bidding(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .end_bidding(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Bidding end", product.into_dto())),
    ))
}

fn not_found() -> AppError {
    AppError::NotFound("No product found with this id".to_string())
}
