use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use entity::sea_orm_active_enums::UserRole;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, AuthUser},
        policy::{Action, Resource},
    },
    util::token::TokenService,
};


fn tokens() -> TokenService {
    TokenService::new("access-secret", "refresh-secret", 3600, 7200)
}

fn identity(role: UserRole) -> AuthUser {
    AuthUser {
        user_id: 3,
        role,
        email: "caller@example.com".to_string(),
    }
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
