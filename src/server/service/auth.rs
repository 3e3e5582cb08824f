use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::AuthUser,
    model::{
        auth::AuthTokens,
        user::{CreateUserParams, User},
    },
    util::{password::PasswordHasher, token::TokenService},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    hasher: &'a PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        hasher: &'a PasswordHasher,
    ) -> Self {
        Self { db, tokens, hasher }
    }

    /// Registers a user, storing a bcrypt hash in place of the plaintext password.
    pub async fn sign_up(&self, mut params: CreateUserParams) -> Result<User, AppError> {
        params.password = self.hasher.hash(params.password).await?;

        let user = UserRepository::new(self.db).create(params).await?;

        tracing::info!(user_id = user.id, "Registered user {}", user.email);

        Ok(user)
    }

    /// Verifies credentials and issues an access and a refresh token.
    ///
    /// # Returns
    /// - `Ok(AuthTokens)` - Both tokens carrying the user's id, role and email
    /// - `Err(AppError::NotFound)` - No user registered with `email`
    /// - `Err(AppError::AuthErr(AuthError::IncorrectPassword))` - Password does not match
    pub async fn sign_in(&self, email: &str, password: String) -> Result<AuthTokens, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("No user found with this email".to_string()))?;

        if !self
            .hasher
            .verify(password, credentials.password_hash)
            .await?
        {
            return Err(AuthError::IncorrectPassword.into());
        }

        let identity = AuthUser::from(&credentials.user);

        Ok(AuthTokens {
            access_token: self.tokens.issue_access(&identity)?,
            refresh_token: self.tokens.issue_refresh(&identity)?,
        })
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// The role and email in the new token are read from the database, not from the
    /// refresh token, so role changes take effect on the next refresh.
    ///
    /// # Returns
    /// - `Ok(String)` - New access token
    /// - `Err(AppError::AuthErr(AuthError::InvalidRefreshToken))` - Token failed verification
    /// - `Err(AppError::NotFound)` - The token's user has been deleted
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let identity = self.tokens.verify_refresh(refresh_token)?;

        let user = UserRepository::new(self.db)
            .find_by_id(identity.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No user found with this id".to_string()))?;

        self.tokens.issue_access(&AuthUser::from(&user))
    }
}
