//! Authentication response value object for API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::token::IssuedToken;

/// Authentication response returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Opaque refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Access token expiry instant
    pub expires_at: DateTime<Utc>,

    /// Username the tokens were issued to
    pub username: String,
}

impl AuthResponse {
    /// Builds a response from a signed access token and a raw refresh token
    pub fn new(access: IssuedToken, refresh_token: String, username: String) -> Self {
        Self {
            access_token: access.token,
            refresh_token,
            expires_in: access.expires_in,
            expires_at: access.expires_at,
            username,
        }
    }
}
