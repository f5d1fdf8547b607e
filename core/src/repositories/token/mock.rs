//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token repository for testing
#[derive(Default)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::internal("duplicate refresh token hash"));
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        Ok(self.tokens.read().await.get(token_hash).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_refresh_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.write().await.remove(token_hash).is_some())
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| t.user_id != user_id);
        Ok(before - tokens.len())
    }
}
