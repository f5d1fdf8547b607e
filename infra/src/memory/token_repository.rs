use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use rc_core::domain::entities::token::RefreshToken;
use rc_core::errors::DomainError;
use rc_core::repositories::TokenRepository;

/// In-memory implementation of TokenRepository, keyed by token hash
#[derive(Default)]
pub struct InMemoryTokenRepository {
    tokens: RwLock<HashMap<String, RefreshToken>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live refresh tokens across all users
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::internal("Refresh token hash already stored"));
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
        let mut found: Vec<RefreshToken> = tokens
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
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
