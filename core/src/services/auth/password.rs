//! Password hashing with bcrypt

use crate::errors::DomainError;

/// Hash a password with the given bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("Failed to hash password: {}", e),
    })
}

/// Check a password against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, DomainError> {
    bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
        message: format!("Failed to verify password: {}", e),
    })
}
