use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{RefreshTokenDto, RefreshTokenResponseDto, SignInDto, SignInResponseDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::validation::ValidatedJson,
        model::user::CreateUserParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// The password is stored as a bcrypt hash and never returned. Accounts default to the
/// `user` role.
///
/// # Returns
/// - `200 OK` - Created account
/// - `400 Bad Request` - Missing fields, invalid email or short password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    tag = AUTH_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.tokens, &state.hasher)
        .sign_up(CreateUserParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("User created successfully", user.into_dto())),
    ))
}

/// Exchange email and password for an access token and a refresh token.
///
/// # Returns
/// - `200 OK` - Both tokens
/// - `401 Unauthorized` - Wrong password
/// - `404 Not Found` - No account with this email
#[utoipa::path(
    post,
    path = "/api/v1/auth/signin",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = SignInResponseDto),
        (status = 401, description = "Password is incorrect", body = ErrorDto),
        (status = 404, description = "No user found with this email", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.tokens, &state.hasher)
        .sign_in(&payload.email, payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("User signin successfully", tokens.into_dto())),
    ))
}

/// Issue a new access token from a refresh token.
///
/// Any refresh token failure, including an access token submitted by mistake, is 403.
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh-token",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "New access token", body = RefreshTokenResponseDto),
        (status = 403, description = "Invalid refresh token", body = ErrorDto),
        (status = 404, description = "Token's user no longer exists", body = ErrorDto)
    ),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let access_token = AuthService::new(&state.db, &state.tokens, &state.hasher)
        .refresh(&payload.refresh_token)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "New access token generated successfully",
            RefreshTokenResponseDto { access_token },
        )),
    ))
}
