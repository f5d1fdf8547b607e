use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use rc_core::domain::entities::user::User;
use rc_core::domain::entities::verification_token::VerificationToken;
use rc_core::errors::{AuthError, DomainError};
use rc_core::repositories::UserRepository;

#[derive(Default)]
struct Store {
    users: HashMap<Uuid, User>,
    /// Verification tokens keyed by token value
    tokens: HashMap<String, VerificationToken>,
}

/// In-memory implementation of UserRepository
///
/// Users and tokens share one lock so that signup and verification are
/// atomic, matching the transactional MySQL implementation.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconsumed verification token of a user, if any
    pub async fn verification_token_for(&self, user_id: Uuid) -> Option<String> {
        let store = self.store.read().await;
        store
            .tokens
            .values()
            .find(|t| t.user_id == user_id)
            .map(|t| t.token.clone())
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.username == username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.values().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.values().any(|u| u.email == email))
    }

    async fn create_with_verification_token(
        &self,
        user: User,
        token: VerificationToken,
    ) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        let mut fields = Vec::new();
        if store.users.values().any(|u| u.username == user.username) {
            fields.push("username".to_string());
        }
        if store.users.values().any(|u| u.email == user.email) {
            fields.push("email".to_string());
        }
        if !fields.is_empty() {
            return Err(AuthError::AlreadyInUse { fields }.into());
        }

        store.tokens.insert(token.token.clone(), token);
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn enable_with_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<User>, DomainError> {
        let mut store = self.store.write().await;

        let Some(record) = store.tokens.remove(token) else {
            return Ok(None);
        };

        Ok(store.users.get_mut(&record.user_id).map(|user| {
            user.enable();
            user.clone()
        }))
    }
}
