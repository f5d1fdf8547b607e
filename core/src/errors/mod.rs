//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for an internal failure with a message
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_is_transparent() {
        let error: DomainError = AuthError::BadCredentials.into();
        assert_eq!(error.to_string(), "Bad Credentials");
    }

    #[test]
    fn test_already_in_use_lists_fields() {
        let error = AuthError::AlreadyInUse {
            fields: vec!["username".to_string(), "email".to_string()],
        };
        assert_eq!(error.to_string(), "Already in use: username, email");
    }

    #[test]
    fn test_internal_helper() {
        let error = DomainError::internal("pool closed");
        assert!(matches!(error, DomainError::Internal { ref message } if message == "pool closed"));
    }
}
