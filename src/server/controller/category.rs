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
        category::{CategoryDetailDto, CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        data::category::CATEGORY_QUERY,
        error::AppError,
        middleware::validation::{IdPath, ValidatedJson},
        model::category::{CategoryDetail, CreateCategoryParams, UpdateCategoryParams},
        query::ListQuery,
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create a new product category.
///
/// # Access Control
/// - `Admin` - Only admins can create categories
///
/// # Returns
/// - `200 OK` - Created category
/// - `400 Bad Request` - Blank category name
/// - `409 Conflict` - A category with this name already exists
#[utoipa::path(
    post,
    path = "/api/v1/category",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Category name already taken", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Category created successfully",
            category.into_dto(),
        )),
    ))
}

/// List categories.
///
/// Accepts `searchTerm`, `categoryName`, `page`, `limit`, `sortBy` and `sortOrder`. Unknown
/// parameters are rejected with 400. An empty page is reported as 404.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/category",
    tag = CATEGORY_TAG,
    params(
        ("searchTerm" = Option<String>, Query, description = "Substring matched against the category name"),
        ("categoryName" = Option<String>, Query, description = "Exact category name"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sortable field (default: createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Matching categories", body = [CategoryDetailDto]),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 404, description = "No category matched", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery::parse(&params, &CATEGORY_QUERY)?;

    let page = CategoryService::new(&state.db).get_all(query).await?;

    if page.is_empty() {
        return Err(AppError::NotFound("No category found!".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(page.into_response("Category retrived successfully", CategoryDetail::into_dto)),
    ))
}

/// Get a category with its products.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/v1/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category with products", body = CategoryDetailDto),
        (status = 400, description = "Non-numeric id", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Category retrived successfully",
            category.into_dto(),
        )),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Updated category", body = CategoryDetailDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .update(id, UpdateCategoryParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Category updated successfully",
            category.into_dto(),
        )),
    ))
}

/// Delete a category. Its products are removed with it.
#[utoipa::path(
    delete,
    path = "/api/v1/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Deleted category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .delete(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Category deleted successfully",
            category.into_dto(),
        )),
    ))
}

fn not_found() -> AppError {
    AppError::NotFound("No category found with this id".to_string())
}
