//! Route table, middleware stack and OpenAPI document.
//!
//! Every API route carries a `require_access` layer naming its `(Resource, Action)` policy
//! key, public routes included, so a route whose key is missing from the policy table is
//! denied instead of silently left open.

use std::any::Any;

use axum::{
    http::HeaderValue,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{
        auction_winner::{self, AUCTION_WINNER_TAG},
        auth::{self, AUTH_TAG},
        bid::{self, BID_TAG},
        category::{self, CATEGORY_TAG},
        message::{self, MESSAGE_TAG},
        payment::{self, PAYMENT_TAG},
        product::{self, PRODUCT_TAG},
        user::{self, PROFILE_TAG, USER_TAG},
    },
    error::{config::ConfigError, AppError, InternalServerError},
    middleware::{
        auth::{require_access, AccessGate},
        policy::{Action, Resource},
    },
    realtime::socket::socket,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Auction Marketplace API"),
    paths(
        auth::sign_up,
        auth::sign_in,
        auth::refresh_token,
        user::get_users,
        user::get_user_by_id,
        user::update_user,
        user::delete_user,
        user::get_profile,
        user::update_profile,
        category::create_category,
        category::get_categories,
        category::get_category_by_id,
        category::update_category,
        category::delete_category,
        product::create_product,
        product::get_products,
        product::get_product_by_id,
        product::get_products_by_category,
        product::update_product,
        product::delete_product,
        product::start_bidding,
        product::end_bidding,
        bid::place_bid,
        bid::get_bids,
        bid::get_bid_by_id,
        bid::update_bid,
        bid::delete_bid,
        auction_winner::create_auction_winner,
        auction_winner::get_auction_winners,
        auction_winner::get_auction_winner_by_id,
        auction_winner::update_auction_winner,
        auction_winner::delete_auction_winner,
        message::create_message,
        message::get_messages,
        message::get_message_by_id,
        message::update_message,
        message::delete_message,
        payment::create_payment,
        payment::get_payments,
        payment::get_payment_by_id,
        payment::update_payment,
        payment::delete_payment,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Signup, signin and token refresh"),
        (name = USER_TAG, description = "User administration"),
        (name = PROFILE_TAG, description = "The caller's own account"),
        (name = CATEGORY_TAG, description = "Product categories"),
        (name = PRODUCT_TAG, description = "Auctioned products"),
        (name = BID_TAG, description = "Bids placed on products"),
        (name = AUCTION_WINNER_TAG, description = "Auction results"),
        (name = MESSAGE_TAG, description = "Product discussion threads"),
        (name = PAYMENT_TAG, description = "Payments for won auctions"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the full application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let tokens = state.tokens.clone();
    let guard = |resource: Resource, action: Action| {
        middleware::from_fn_with_state(
            AccessGate::new(tokens.clone(), resource, action),
            require_access,
        )
    };

    let auth_routes = Router::new()
        .route(
            "/signup",
            post(auth::sign_up).layer(guard(Resource::Auth, Action::SignUp)),
        )
        .route(
            "/signin",
            post(auth::sign_in).layer(guard(Resource::Auth, Action::SignIn)),
        )
        .route(
            "/refresh-token",
            post(auth::refresh_token).layer(guard(Resource::Auth, Action::RefreshToken)),
        );

    let user_routes = Router::new()
        .route(
            "/",
            get(user::get_users).layer(guard(Resource::User, Action::List)),
        )
        .route(
            "/{id}",
            get(user::get_user_by_id).layer(guard(Resource::User, Action::Read)),
        )
        .route(
            "/{id}",
            patch(user::update_user).layer(guard(Resource::User, Action::Update)),
        )
        .route(
            "/{id}",
            delete(user::delete_user).layer(guard(Resource::User, Action::Delete)),
        );

    let profile_routes = Router::new()
        .route(
            "/",
            get(user::get_profile).layer(guard(Resource::Profile, Action::Read)),
        )
        .route(
            "/update",
            patch(user::update_profile).layer(guard(Resource::Profile, Action::Update)),
        );

    let category_routes = Router::new()
        .route(
            "/",
            post(category::create_category).layer(guard(Resource::Category, Action::Create)),
        )
        .route(
            "/",
            get(category::get_categories).layer(guard(Resource::Category, Action::List)),
        )
        .route(
            "/{id}",
            get(category::get_category_by_id).layer(guard(Resource::Category, Action::Read)),
        )
        .route(
            "/{id}",
            patch(category::update_category).layer(guard(Resource::Category, Action::Update)),
        )
        .route(
            "/{id}",
            delete(category::delete_category).layer(guard(Resource::Category, Action::Delete)),
        );

    let product_routes = Router::new()
        .route(
            "/",
            post(product::create_product).layer(guard(Resource::Product, Action::Create)),
        )
        .route(
            "/",
            get(product::get_products).layer(guard(Resource::Product, Action::List)),
        )
        .route(
            "/{id}",
            get(product::get_product_by_id).layer(guard(Resource::Product, Action::Read)),
        )
        .route(
            "/{id}",
            patch(product::update_product).layer(guard(Resource::Product, Action::Update)),
        )
        .route(
            "/{id}",
            delete(product::delete_product).layer(guard(Resource::Product, Action::Delete)),
        )
        .route(
            "/{id}/category",
            get(product::get_products_by_category)
                .layer(guard(Resource::Product, Action::ListByCategory)),
        )
        .route(
            "/start-bidding/{id}",
            patch(product::start_bidding).layer(guard(Resource::Product, Action::StartBidding)),
        )
        .route(
            "/end-bidding/{id}",
            patch(product::end_bidding).layer(guard(Resource::Product, Action::EndBidding)),
        );

    let bid_routes = Router::new()
        .route(
            "/",
            post(bid::place_bid).layer(guard(Resource::BiddingHistory, Action::Create)),
        )
        .route(
            "/",
            get(bid::get_bids).layer(guard(Resource::BiddingHistory, Action::List)),
        )
        .route(
            "/{id}",
            get(bid::get_bid_by_id).layer(guard(Resource::BiddingHistory, Action::Read)),
        )
        .route(
            "/{id}",
            patch(bid::update_bid).layer(guard(Resource::BiddingHistory, Action::Update)),
        )
        .route(
            "/{id}",
            delete(bid::delete_bid).layer(guard(Resource::BiddingHistory, Action::Delete)),
        );

    let auction_winner_routes = Router::new()
        .route(
            "/",
            post(auction_winner::create_auction_winner)
                .layer(guard(Resource::AuctionWinner, Action::Create)),
        )
        .route(
            "/",
            get(auction_winner::get_auction_winners)
                .layer(guard(Resource::AuctionWinner, Action::List)),
        )
        .route(
            "/{id}",
            get(auction_winner::get_auction_winner_by_id)
                .layer(guard(Resource::AuctionWinner, Action::Read)),
        )
        .route(
            "/{id}",
            patch(auction_winner::update_auction_winner)
                .layer(guard(Resource::AuctionWinner, Action::Update)),
        )
        .route(
            "/{id}",
            delete(auction_winner::delete_auction_winner)
                .layer(guard(Resource::AuctionWinner, Action::Delete)),
        );

    let message_routes = Router::new()
        .route(
            "/",
            post(message::create_message).layer(guard(Resource::Message, Action::Create)),
        )
        .route(
            "/",
            get(message::get_messages).layer(guard(Resource::Message, Action::List)),
        )
        .route(
            "/{id}",
            get(message::get_message_by_id).layer(guard(Resource::Message, Action::Read)),
        )
        .route(
            "/{id}",
            patch(message::update_message).layer(guard(Resource::Message, Action::Update)),
        )
        .route(
            "/{id}",
            delete(message::delete_message).layer(guard(Resource::Message, Action::Delete)),
        );

    let payment_routes = Router::new()
        .route(
            "/",
            post(payment::create_payment).layer(guard(Resource::Payment, Action::Create)),
        )
        .route(
            "/",
            get(payment::get_payments).layer(guard(Resource::Payment, Action::List)),
        )
        .route(
            "/{id}",
            get(payment::get_payment_by_id).layer(guard(Resource::Payment, Action::Read)),
        )
        .route(
            "/{id}",
            patch(payment::update_payment).layer(guard(Resource::Payment, Action::Update)),
        )
        .route(
            "/{id}",
            delete(payment::delete_payment).layer(guard(Resource::Payment, Action::Delete)),
        );

    let api = Router::new()
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/profile", profile_routes)
        .nest("/category", category_routes)
        .nest("/product", product_routes)
        .nest("/abh", bid_routes)
        .nest("/auction-winner", auction_winner_routes)
        .nest("/message", message_routes)
        .nest("/payment", payment_routes);

    Router::new()
        .nest("/api/v1", api)
        .route("/socket", get(socket))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS policy allowing the configured frontend origin. `*` allows any origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(AnyOrigin).allow_headers(AnyOrigin);

    if origin == "*" {
        return Ok(layer.allow_origin(AnyOrigin));
    }

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        value: origin.to_string(),
    })?;

    Ok(layer.allow_origin(origin))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> AppError {
    AppError::NotFound("API Not Found".to_string())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}
