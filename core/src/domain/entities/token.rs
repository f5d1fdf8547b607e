//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime (15 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 900;

/// Number of alphanumeric characters in a raw refresh token
pub const REFRESH_TOKEN_LENGTH: usize = 64;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for an access token valid for `ttl_seconds` from now
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    pub fn new_access_token(subject: &str, issuer: &str, ttl_seconds: i64) -> Option<Self> {
        let now = Utc::now();
        let expiry = now.checked_add_signed(Duration::try_seconds(ttl_seconds)?)?;

        Some(Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        })
    }
}

/// A freshly signed access token with its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Encoded JWT
    pub token: String,

    /// Absolute expiry instant
    pub expires_at: DateTime<Utc>,

    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Refresh token entity stored in the database
///
/// Only the SHA-256 hash of the raw value is kept; the raw value is handed to
/// the client once and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token
    pub id: Uuid,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Hashed token value
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token record
    pub fn new(user_id: Uuid, token_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: Utc::now(),
        }
    }
}
