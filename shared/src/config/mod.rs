//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing, password hashing and verification links
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outgoing mail provider
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub use auth::{verification_url_for, AuthConfig, JwtConfig, MAX_ACCESS_TOKEN_EXPIRY};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use server::{CorsConfig, ServerConfig};

/// Raised when a loaded configuration must not be used
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in {0}")]
    DefaultJwtSecret(Environment),

    #[error("JWT_ACCESS_TOKEN_EXPIRY must be between 1 and {MAX_ACCESS_TOKEN_EXPIRY} seconds, got {0}")]
    InvalidTokenExpiry(i64),

    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    InvalidBcryptCost(u32),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Mail configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            mail: MailConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("RUST_LOG") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            mail: MailConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging,
        }
    }

    /// Reject settings that are unsafe or unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultJwtSecret(self.environment));
        }
        if !(1..=MAX_ACCESS_TOKEN_EXPIRY).contains(&self.auth.jwt.access_token_expiry) {
            return Err(ConfigError::InvalidTokenExpiry(self.auth.jwt.access_token_expiry));
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::InvalidBcryptCost(self.auth.bcrypt_cost));
        }
        Ok(())
    }
}

/// Read an environment variable, falling back to `default` when unset
pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to `default` when unset or malformed
pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
