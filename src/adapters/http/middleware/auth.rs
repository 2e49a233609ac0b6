//! Authentication middleware and extractor for axum.
//!
//! - `auth_middleware` - Layer that validates Bearer tokens and injects the user into extensions
//! - `RequireAuth` - Extractor that requires authentication
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The middleware is attached only to routes that create or delete content,
//! so a bad token on a public read never gets in the way.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::{AuthError, AuthenticatedUser, DomainError, ErrorCode};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Validates the Bearer token, if any.
///
/// - valid token: `AuthenticatedUser` is inserted into request extensions
/// - no token: the request continues and `RequireAuth` decides
/// - invalid or expired token: 401
/// - misconfigured validator: 500
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let Some(token) = token else {
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => auth_error_response(&e),
    }
}

fn auth_error_response(error: &AuthError) -> Response {
    let err = match error {
        AuthError::TokenExpired => {
            tracing::warn!("Rejected expired token");
            DomainError::unauthorized("Token expired")
        }
        AuthError::InvalidToken => {
            tracing::warn!("Rejected invalid token");
            DomainError::unauthorized("Invalid token")
        }
        AuthError::ServiceUnavailable(msg) => DomainError::new(
            ErrorCode::InternalError,
            format!("Token validator unavailable: {}", msg),
        ),
    };
    ApiError(err).into_response()
}

/// Extractor that requires authentication.
///
/// Returns 401 when the auth middleware did not inject a user.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No token was presented.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => {
                ApiError(DomainError::unauthorized("Missing authentication")).into_response()
            }
        }
    }
}
