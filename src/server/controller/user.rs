use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{UpdateUserDto, UserDetailDto, UserDto},
    },
    server::{
        data::user::USER_QUERY,
        error::AppError,
        middleware::{
            auth::AuthUser,
            validation::{IdPath, ValidatedJson},
        },
        model::user::{UpdateUserParams, User},
        query::ListQuery,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// List users.
///
/// Supports `searchTerm` over full name and address, exact `fullName`, `email`, `role` and
/// `gender` filters, and the standard paging and sorting parameters. Password hashes are
/// never returned.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(
        ("searchTerm" = Option<String>, Query, description = "Substring matched against full name and address"),
        ("fullName" = Option<String>, Query, description = "Exact full name"),
        ("email" = Option<String>, Query, description = "Exact email"),
        ("role" = Option<String>, Query, description = "admin or user"),
        ("gender" = Option<String>, Query, description = "male, female or others"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sortable field (default: createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Matching users", body = [UserDto]),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No user matched", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery::parse(&params, &USER_QUERY)?;

    let page = UserService::new(&state.db, &state.hasher)
        .get_all(query)
        .await?;

    if page.is_empty() {
        return Err(AppError::NotFound("No user found!".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(page.into_response("Users retrived successfully", User::into_dto)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User with products, winnings, messages and bids", body = UserDetailDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.hasher)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("User retrived successfully", user.into_dto())),
    ))
}

/// Update any user, including their role. A new password is hashed before storage.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.hasher)
        .update(id, UpdateUserParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("User updated successfully", user.into_dto())),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.hasher)
        .delete(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("User deleted successfully", user.into_dto())),
    ))
}

/// Get the caller's own account.
///
/// The account is identified by the access token, never by a path or query parameter.
///
/// # Access Control
/// - `Admin`, `User`
///
/// # Returns
/// - `200 OK` - Caller's account with relations
/// - `401 Unauthorized` - Token missing, invalid, or its user no longer exists
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Caller's account", body = UserDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db, &state.hasher)
        .get_profile(caller.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Profile retrived successfully",
            profile.into_dto(),
        )),
    ))
}

/// Update the caller's own account.
///
/// # Returns
/// - `200 OK` - Updated account
/// - `403 Forbidden` - Payload sets `role`; nothing is changed
#[utoipa::path(
    patch,
    path = "/api/v1/profile/update",
    tag = PROFILE_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role change attempted", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.hasher)
        .update_profile(caller.user_id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Profile updated successfully",
            user.into_dto(),
        )),
    ))
}

fn not_found() -> AppError {
    AppError::NotFound("No user found with this id".to_string())
}
