//! Application configuration module
//!
//! Configuration is read from environment variables with the `FORUM_API`
//! prefix, using `config` and `dotenvy`. Nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use forum_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Access token verification
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` when present, then reads `FORUM_API__*` variables:
    ///
    /// - `FORUM_API__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `FORUM_API__DATABASE__URL=...` -> `database.url = ...`
    /// - `FORUM_API__AUTH__ACCESS_TOKEN_KEY=...` -> `auth.access_token_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FORUM_API")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("FORUM_API__DATABASE__URL", "postgresql://test@localhost/forumapi");
        env::set_var("FORUM_API__AUTH__ACCESS_TOKEN_KEY", "dev-access-secret");
    }

    fn clear_env() {
        env::remove_var("FORUM_API__DATABASE__URL");
        env::remove_var("FORUM_API__AUTH__ACCESS_TOKEN_KEY");
        env::remove_var("FORUM_API__AUTH__ACCESS_TOKEN_AGE_SECS");
        env::remove_var("FORUM_API__SERVER__PORT");
        env::remove_var("FORUM_API__SERVER__ENVIRONMENT");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/forumapi");
        assert_eq!(config.auth.access_token_key.expose_secret(), "dev-access-secret");
    }

    #[test]
    fn test_validate_minimal_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.auth.access_token_age_secs, 3000);
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("FORUM_API__SERVER__PORT", "3000");
        env::set_var("FORUM_API__AUTH__ACCESS_TOKEN_AGE_SECS", "600");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.access_token_age_secs, 600);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("FORUM_API__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        // dev key is too short for production
        assert_eq!(config.validate(), Err(ValidationError::WeakAccessTokenKey));
    }

    #[test]
    fn test_missing_database_url_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("FORUM_API__AUTH__ACCESS_TOKEN_KEY", "dev-access-secret");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }
}
