//! Configuration for the authentication service

use rc_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Verification link prefix; the token is appended as the last path segment
    pub verification_base_url: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self::from(&AuthConfig::default())
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
            verification_base_url: config.verification_base_url.clone(),
        }
    }
}

impl AuthServiceConfig {
    /// Full verification link for a token
    pub fn verification_link(&self, token: &str) -> String {
        format!("{}/{}", self.verification_base_url.trim_end_matches('/'), token)
    }
}
