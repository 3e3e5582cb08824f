//! JWT issuing and verification for access and refresh tokens.
//!
//! Both token kinds carry the same claims but are signed with distinct secrets and
//! lifetimes, so a refresh token can never be presented as an access token.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::{
    model::user::RoleDto,
    server::{
        config::Config,
        error::{auth::AuthError, AppError},
        middleware::auth::AuthUser,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a decimal string
    pub sub: String,
    pub role: RoleDto,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    fn issue(&self, user: &AuthUser) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.user_id.to_string(),
            role: user.role.into(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    fn verify(&self, token: &str) -> Result<AuthUser, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        let claims = data.claims;

        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| jsonwebtoken::errors::Error::from(ErrorKind::InvalidSubject))?;

        Ok(AuthUser {
            user_id,
            role: claims.role.into(),
            email: claims.email,
        })
    }
}

/// Signs and verifies access and refresh tokens. Cheap to clone.
#[derive(Clone)]
pub struct TokenService {
    access: Arc<TokenKeys>,
    refresh: Arc<TokenKeys>,
}

impl TokenService {
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl_secs: i64,
        refresh_ttl_secs: i64,
    ) -> Self {
        Self {
            access: Arc::new(TokenKeys::new(access_secret, access_ttl_secs)),
            refresh: Arc::new(TokenKeys::new(refresh_secret, refresh_ttl_secs)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            &config.jwt_refresh_secret,
            config.jwt_expires_in_secs,
            config.jwt_refresh_expires_in_secs,
        )
    }

    pub fn issue_access(&self, user: &AuthUser) -> Result<String, AppError> {
        Ok(self.access.issue(user)?)
    }

    pub fn issue_refresh(&self, user: &AuthUser) -> Result<String, AppError> {
        Ok(self.refresh.issue(user)?)
    }

    /// Verifies an access token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Identity decoded from the claims
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed token, expired, or
    ///   a subject that is not a user id
    pub fn verify_access(&self, token: &str) -> Result<AuthUser, AuthError> {
        self.access.verify(token).map_err(AuthError::InvalidToken)
    }

    /// Verifies a refresh token. Every failure maps to `AuthError::InvalidRefreshToken`.
    pub fn verify_refresh(&self, token: &str) -> Result<AuthUser, AuthError> {
        self.refresh
            .verify(token)
            .map_err(AuthError::InvalidRefreshToken)
    }
}
