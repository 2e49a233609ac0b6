//! Authentication types for the domain layer.
//!
//! These types represent the caller identity extracted from an access
//! token. Token issuance belongs to the account service; this crate only
//! consumes verified identities via the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user id issued by the account service.
    pub id: UserId,

    /// Username claim, when the token carries one.
    pub username: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, username: Option<String>) -> Self {
        Self { id, username }
    }

    /// Returns the username, or the user id as fallback.
    pub fn username_or_id(&self) -> &str {
        self.username.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token validator cannot be used (misconfiguration).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
