//! Application state shared across all request handlers.
//!
//! The state is built once in `main` and cloned into every handler through Axum's state
//! extraction. Every field is cheap to clone: the connection pool, the token keys and the
//! broadcast hub are all reference counted internally.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    realtime::RealtimeHub,
    util::{password::PasswordHasher, token::TokenService},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies access and refresh tokens.
    pub tokens: TokenService,

    /// bcrypt hasher configured with the salt rounds from the environment.
    pub hasher: PasswordHasher,

    /// Broadcast hub feeding every connected WebSocket client.
    pub events: RealtimeHub,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        hasher: PasswordHasher,
        events: RealtimeHub,
    ) -> Self {
        Self {
            db,
            tokens,
            hasher,
            events,
        }
    }

    /// Builds the state from configuration with a fresh broadcast hub.
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        Self::new(
            db,
            TokenService::from_config(config),
            PasswordHasher::new(config.bcrypt_salt_rounds),
            RealtimeHub::new(),
        )
    }
}
