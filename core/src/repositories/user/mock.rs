//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository for testing
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    tokens: Arc<RwLock<HashMap<String, VerificationToken>>>,
    /// Conflict reported by the next create, simulating a lost signup race
    fail_next_create_with_conflict: Arc<RwLock<Option<Vec<String>>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn token_count(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Verification token issued to a user, if still unconsumed
    pub async fn token_for(&self, user_id: Uuid) -> Option<String> {
        self.tokens
            .read()
            .await
            .values()
            .find(|t| t.user_id == user_id)
            .map(|t| t.token.clone())
    }

    /// Make the next create fail as if a concurrent signup won the race
    pub async fn conflict_on_next_create(&self, fields: Vec<String>) {
        *self.fail_next_create_with_conflict.write().await = Some(fields);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn create_with_verification_token(
        &self,
        user: User,
        token: VerificationToken,
    ) -> Result<User, DomainError> {
        if let Some(fields) = self.fail_next_create_with_conflict.write().await.take() {
            return Err(AuthError::AlreadyInUse { fields }.into());
        }

        let mut users = self.users.write().await;
        let mut fields = Vec::new();
        if users.values().any(|u| u.username == user.username) {
            fields.push("username".to_string());
        }
        if users.values().any(|u| u.email == user.email) {
            fields.push("email".to_string());
        }
        if !fields.is_empty() {
            return Err(AuthError::AlreadyInUse { fields }.into());
        }

        users.insert(user.id, user.clone());
        self.tokens.write().await.insert(token.token.clone(), token);
        Ok(user)
    }

    async fn enable_with_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<User>, DomainError> {
        let mut tokens = self.tokens.write().await;
        let Some(record) = tokens.remove(token) else {
            return Ok(None);
        };

        let mut users = self.users.write().await;
        match users.get_mut(&record.user_id) {
            Some(user) => {
                user.enable();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}
