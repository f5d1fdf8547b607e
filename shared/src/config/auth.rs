//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse};

const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Longest accepted access token lifetime (30 days)
pub const MAX_ACCESS_TOKEN_EXPIRY: i64 = 30 * 24 * 60 * 60;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            access_token_expiry: 900, // 15 minutes
            issuer: String::from("reddit-clone"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor used for password hashes
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Public URL prefix that verification tokens are appended to
    pub verification_base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
            verification_base_url: verification_url_for("http://localhost:8080"),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let base_url = env_or("APP_BASE_URL", "http://localhost:8080");

        Self {
            jwt: JwtConfig {
                secret: env_or("JWT_SECRET", DEFAULT_JWT_SECRET),
                access_token_expiry: env_parse("JWT_ACCESS_TOKEN_EXPIRY", defaults.access_token_expiry),
                issuer: env_or("JWT_ISSUER", &defaults.issuer),
            },
            bcrypt_cost: env_parse("BCRYPT_COST", default_bcrypt_cost()),
            verification_base_url: verification_url_for(&base_url),
        }
    }
}

/// Builds the account verification endpoint URL for a public base URL
pub fn verification_url_for(base_url: &str) -> String {
    format!("{}/api/auth/account-verification", base_url.trim_end_matches('/'))
}

fn default_bcrypt_cost() -> u32 {
    12
}
