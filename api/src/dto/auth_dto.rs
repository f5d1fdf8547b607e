use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use rc_core::domain::entities::user::User;
use rc_core::domain::value_objects::AuthResponse as DomainAuthResponse;
use rc_shared::validation::{is_valid_email, is_valid_password, is_valid_username};

/// Signup fields are checked with the same predicates the auth service uses,
/// so a request that passes here is never rejected again downstream.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(custom = "validate_username")]
    pub username: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_password")]
    pub password: String,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    check(
        is_valid_username(username),
        "username",
        "Username must be 3 to 32 letters, digits, '-' or '_'",
    )
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    check(is_valid_email(email), "email", "Email should be valid")
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    check(
        is_valid_password(password),
        "password",
        "Password must be between 8 and 72 characters",
    )
}

fn check(valid: bool, code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if valid {
        return Ok(());
    }
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    Err(error)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub expires_at: DateTime<Utc>,
    pub username: String,
}

impl From<DomainAuthResponse> for AuthResponse {
    fn from(response: DomainAuthResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_in: response.expires_in,
            expires_at: response.expires_at,
            username: response.username,
        }
    }
}

/// Public view of the authenticated account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub username: String,
    pub email: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for MeResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            enabled: user.enabled,
            created_at: user.created_at,
        }
    }
}
