//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Access token settings shared with the account service
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for access tokens
    pub access_token_key: SecretString,

    /// Maximum access token age in seconds
    #[serde(default = "default_access_token_age")]
    pub access_token_age_secs: u64,

    /// Expected `iss` claim, unchecked when absent
    #[serde(default)]
    pub issuer: Option<String>,
}

impl AuthConfig {
    pub fn access_token_age(&self) -> Duration {
        Duration::from_secs(self.access_token_age_secs)
    }

    /// Validate authentication configuration
    ///
    /// Production deployments need a key of at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let key = self.access_token_key.expose_secret();
        if key.is_empty() {
            return Err(ValidationError::MissingRequired("ACCESS_TOKEN_KEY"));
        }
        if self.access_token_age_secs == 0 {
            return Err(ValidationError::InvalidTokenAge);
        }
        if *environment == Environment::Production && key.len() < 32 {
            return Err(ValidationError::WeakAccessTokenKey);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_key: SecretString::new(String::new()),
            access_token_age_secs: default_access_token_age(),
            issuer: None,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token_key", &"[REDACTED]")
            .field("access_token_age_secs", &self.access_token_age_secs)
            .field("issuer", &self.issuer)
            .finish()
    }
}

fn default_access_token_age() -> u64 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> AuthConfig {
        AuthConfig {
            access_token_key: SecretString::new(key.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_age(), Duration::from_secs(3000));
        assert!(config.issuer.is_none());
    }

    #[test]
    fn test_missing_key() {
        let config = AuthConfig::default();
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("ACCESS_TOKEN_KEY"))
        );
    }

    #[test]
    fn test_zero_age_rejected() {
        let config = AuthConfig {
            access_token_age_secs: 0,
            ..config_with_key("dev-secret")
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTokenAge)
        );
    }

    #[test]
    fn test_short_key_allowed_in_development() {
        assert!(config_with_key("dev-secret")
            .validate(&Environment::Development)
            .is_ok());
    }

    #[test]
    fn test_short_key_rejected_in_production() {
        assert_eq!(
            config_with_key("dev-secret").validate(&Environment::Production),
            Err(ValidationError::WeakAccessTokenKey)
        );
        assert!(config_with_key(&"k".repeat(32))
            .validate(&Environment::Production)
            .is_ok());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", config_with_key("very-secret-value"));
        assert!(!rendered.contains("very-secret-value"));
    }
}
