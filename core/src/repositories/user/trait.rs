//! User repository trait defining the interface for account persistence.
//!
//! Accounts and their verification tokens live behind the same trait so that
//! the two writes that must happen together (create user + token, enable user
//! + consume token) can each run in a single storage transaction.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations must enforce uniqueness of `username` and `email` at the
/// storage level and report a violation as
/// [`AuthError::AlreadyInUse`](crate::errors::AuthError::AlreadyInUse).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by username (exact match)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given username
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check if a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new user together with its verification token
    ///
    /// Either both rows are written or neither is.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(AuthError::AlreadyInUse { .. }))` - username or email taken
    /// * `Err(DomainError)` - Storage failure
    async fn create_with_verification_token(
        &self,
        user: User,
        token: VerificationToken,
    ) -> Result<User, DomainError>;

    /// Consume a verification token and enable its owner
    ///
    /// Deleting the token and enabling the user happen atomically, so a token
    /// can enable at most one account, at most once.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The now-enabled user
    /// * `Ok(None)` - No such token (never issued or already consumed)
    /// * `Err(DomainError)` - Storage failure
    async fn enable_with_verification_token(&self, token: &str)
        -> Result<Option<User>, DomainError>;
}
