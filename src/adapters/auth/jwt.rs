//! HS256 access token adapter.
//!
//! Access tokens are signed by the account service with a shared secret.
//! This adapter verifies them locally:
//!
//! 1. Signature check against the shared key
//! 2. Optional issuer check
//! 3. Age check: a token is rejected once `exp` has passed or once
//!    `iat + access_token_age` has passed
//! 4. Mapping the `id` (or `sub`) and `username` claims to `AuthenticatedUser`
//!
//! # Example
//!
//! ```ignore
//! use forum_api::adapters::auth::{JwtConfig, JwtSessionValidator};
//!
//! let validator = JwtSessionValidator::new(JwtConfig::new(secret, Duration::from_secs(3000)));
//! let user = validator.validate("eyJ...").await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the HS256 validator.
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared signing secret.
    pub access_token_key: SecretString,

    /// Maximum token age, counted from `iat`.
    pub access_token_age: Duration,

    /// When set, the `iss` claim must match.
    pub issuer: Option<String>,
}

impl JwtConfig {
    pub fn new(access_token_key: SecretString, access_token_age: Duration) -> Self {
        Self {
            access_token_key,
            access_token_age,
            issuer: None,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_token_key", &"[REDACTED]")
            .field("access_token_age", &self.access_token_age)
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    /// User id as written by the account service.
    #[serde(default)]
    id: Option<String>,

    /// Standard subject, accepted when `id` is absent.
    #[serde(default)]
    sub: Option<String>,

    #[serde(default)]
    username: Option<String>,

    #[serde(default)]
    iss: Option<String>,

    #[serde(default)]
    iat: Option<i64>,

    #[serde(default)]
    exp: Option<i64>,
}

/// Verifies HS256 access tokens issued by the account service.
pub struct JwtSessionValidator {
    config: JwtConfig,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    fn decode_claims(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let key = self.config.access_token_key.expose_secret();
        if key.is_empty() {
            return Err(AuthError::service_unavailable("access token key is not configured"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against exp and iat below.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        if let Some(issuer) = &self.config.issuer {
            validation.set_issuer(&[issuer]);
        }

        decode::<AccessClaims>(token, &DecodingKey::from_secret(key.as_bytes()), &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Token validation failed: {}", e);
                AuthError::InvalidToken
            })
    }

    fn check_age(&self, claims: &AccessClaims) -> Result<(), AuthError> {
        let now = Utc::now().timestamp();

        if claims.iat.is_none() && claims.exp.is_none() {
            tracing::warn!("Token carries neither iat nor exp");
            return Err(AuthError::InvalidToken);
        }

        if let Some(exp) = claims.exp {
            if exp < now {
                tracing::debug!("Token expired at {}", exp);
                return Err(AuthError::TokenExpired);
            }
        }

        if let Some(iat) = claims.iat {
            let max_age = i64::try_from(self.config.access_token_age.as_secs()).unwrap_or(i64::MAX);
            if iat.saturating_add(max_age) < now {
                tracing::debug!("Token issued at {} is older than {}s", iat, max_age);
                return Err(AuthError::TokenExpired);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;
        self.check_age(&claims)?;

        let raw_id = claims.id.or(claims.sub).unwrap_or_default();
        let user_id = UserId::new(raw_id).map_err(|_| {
            tracing::warn!("Token carries no user id");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.username))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("config", &self.config)
            .finish()
    }
}
