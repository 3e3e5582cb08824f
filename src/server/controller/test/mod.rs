use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use crate::server::{
    middleware::auth::AuthUser,
    realtime::RealtimeHub,
    router::router,
    state::AppState,
    util::{password::PasswordHasher, token::TokenService},
};


async fn setup() -> (TestContext, AppState) {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let state = AppState::new(
        test.db.as_ref().unwrap().clone(),
        TokenService::new("access-secret", "refresh-secret", 3600, 7200),
        PasswordHasher::new(4),
        RealtimeHub::new(),
    );

    (test, state)
}

fn app(state: &AppState) -> Router {
    router(state.clone(), CorsLayer::new())
}

/// Issues an access token for an existing user row.
fn bearer_for(state: &AppState, user: &entity::user::Model) -> String {
    let token = state
        .tokens
        .issue_access(&AuthUser {
            user_id: user.id,
            role: user.role,
            email: user.email.clone(),
        })
        .unwrap();

    format!("Bearer {}", token)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(bearer) = bearer {
        request = request.header(header::AUTHORIZATION, bearer);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
