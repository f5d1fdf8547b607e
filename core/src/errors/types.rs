//! Error types for authentication, token management and input validation

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// One or more unique identity fields are taken
    #[error("Already in use: {}", fields.join(", "))]
    AlreadyInUse { fields: Vec<String> },

    #[error("Verification token not found")]
    VerificationTokenNotFound,

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    #[error("Bad Credentials")]
    BadCredentials,

    #[error("Disabled Account")]
    AccountDisabled,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (min: {min}, max: {max})")]
    InvalidLength { field: String, min: usize, max: usize },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::InvalidLength { field, .. } => field,
        }
    }
}
