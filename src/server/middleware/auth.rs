use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use entity::sea_orm_active_enums::UserRole;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::policy::{access_for, Access, Action, Resource},
    model::user::User,
    util::token::TokenService,
};

/// Identity decoded from a verified access token.
///
/// Inserted into the request extensions by `require_access` so handlers can pull it out
/// with `Extension<AuthUser>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub role: UserRole,
    pub email: String,
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
            email: user.email.clone(),
        }
    }
}

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// Checks the request headers against the policy entry for `(resource, action)`.
    ///
    /// # Returns
    /// - `Ok(None)` - Route is public, no identity was required
    /// - `Ok(Some(AuthUser))` - Token verified and role permitted
    /// - `Err(AuthError::MissingToken)` - No bearer token on a protected route
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::AccessDenied)` - Role not permitted, or no policy entry exists
    pub fn require(
        &self,
        headers: &HeaderMap,
        resource: Resource,
        action: Action,
    ) -> Result<Option<AuthUser>, AppError> {
        let Some(access) = access_for(resource, action) else {
            return Err(AuthError::AccessDenied {
                role: "any".to_string(),
                action: format!("{:?} on {:?}", action, resource),
            }
            .into());
        };

        if access == Access::Public {
            return Ok(None);
        }

        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
        let user = self.tokens.verify_access(token)?;

        if !access.permits(user.role) {
            return Err(AuthError::AccessDenied {
                role: format!("{:?}", user.role),
                action: format!("{:?} on {:?}", action, resource),
            }
            .into());
        }

        Ok(Some(user))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Per-route state for `require_access`: the token verifier plus the policy key of the route.
#[derive(Clone)]
pub struct AccessGate {
    tokens: TokenService,
    resource: Resource,
    action: Action,
}

impl AccessGate {
    pub fn new(tokens: TokenService, resource: Resource, action: Action) -> Self {
        Self {
            tokens,
            resource,
            action,
        }
    }
}

/// Middleware enforcing the policy entry of the route it is attached to.
pub async fn require_access(
    State(gate): State<AccessGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user =
        AuthGuard::new(&gate.tokens).require(request.headers(), gate.resource, gate.action)?;

    if let Some(user) = user {
        tracing::debug!(user_id = user.user_id, "Authenticated request");
        request.extensions_mut().insert(user);
    }

    Ok(next.run(request).await)
}
