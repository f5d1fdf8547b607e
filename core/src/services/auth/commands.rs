//! Inputs accepted by the authentication service

use rc_shared::validation::{is_valid_email, is_valid_password, is_valid_username};
use rc_shared::validation::{PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};

use crate::errors::ValidationError;

/// Request to register a new account
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupCommand {
    /// Checks field shapes, stopping at the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            });
        }
        if !is_valid_username(&self.username) {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            });
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
            });
        }
        if !is_valid_password(&self.password) {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: PASSWORD_MIN_LENGTH,
                max: PASSWORD_MAX_LENGTH,
            });
        }
        Ok(())
    }
}

/// Username and password presented at login
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}
