//! Session validation port for access token verification.
//!
//! Tokens are issued by the external account service. This port only turns
//! a presented Bearer token into the identity of the caller.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// HTTP middleware uses this to validate Bearer tokens on the routes that
/// create or delete content.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` when the validator is misconfigured
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate an access token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
