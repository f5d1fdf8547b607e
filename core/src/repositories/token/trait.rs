//! Refresh token repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for refresh token persistence
///
/// Tokens are addressed by the SHA-256 hash of their raw value. A user may
/// hold any number of tokens, one per login.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hash
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - Token not found
    /// * `Err(DomainError)` - Database error occurred
    async fn find_refresh_token(&self, token_hash: &str)
        -> Result<Option<RefreshToken>, DomainError>;

    /// Find all refresh tokens for a user
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError>;

    /// Delete a refresh token by its hash
    ///
    /// # Returns
    /// * `Ok(true)` - Token was deleted
    /// * `Ok(false)` - Token not found
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Delete every refresh token a user holds, returning how many were removed
    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Count the refresh tokens a user holds
    async fn count_user_tokens(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let tokens = self.find_by_user_id(user_id).await?;
        Ok(tokens.len())
    }
}
