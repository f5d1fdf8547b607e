//! Opaque refresh tokens

use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, REFRESH_TOKEN_LENGTH};
use crate::errors::{AuthError, DomainError};
use crate::repositories::TokenRepository;

/// Issues, looks up and revokes refresh tokens
pub struct RefreshTokenService<T: TokenRepository> {
    pub(crate) repository: Arc<T>,
}

impl<T: TokenRepository> RefreshTokenService<T> {
    pub fn new(repository: Arc<T>) -> Self {
        Self { repository }
    }

    /// Generates and stores a new refresh token for `user_id`, returning the raw value
    pub async fn create(&self, user_id: Uuid) -> Result<String, DomainError> {
        let value: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFRESH_TOKEN_LENGTH)
            .map(char::from)
            .collect();

        self.repository
            .save_refresh_token(RefreshToken::new(user_id, Self::hash_token(&value)))
            .await?;

        Ok(value)
    }

    /// Finds the stored record for a raw token value
    pub async fn lookup(&self, value: &str) -> Result<RefreshToken, DomainError> {
        self.repository
            .find_refresh_token(&Self::hash_token(value))
            .await?
            .ok_or(DomainError::Auth(AuthError::RefreshTokenNotFound))
    }

    pub async fn exists(&self, value: &str) -> Result<bool, DomainError> {
        Ok(self
            .repository
            .find_refresh_token(&Self::hash_token(value))
            .await?
            .is_some())
    }

    /// Deletes a token; returns whether anything was removed
    pub async fn delete(&self, value: &str) -> Result<bool, DomainError> {
        self.repository
            .delete_refresh_token(&Self::hash_token(value))
            .await
    }

    /// Deletes every token held by a user
    pub async fn delete_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        self.repository.delete_all_for_user(user_id).await
    }

    /// Hashes a token for storage
    pub(crate) fn hash_token(value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
