//! Configuration for the token service

use rc_shared::config::JwtConfig;

use crate::domain::entities::token::DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// `iss` claim written and required on validation
    pub issuer: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: "reddit-clone".to_string(),
            access_token_expiry_seconds: DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            issuer: jwt.issuer.clone(),
            access_token_expiry_seconds: jwt.access_token_expiry,
        }
    }
}
