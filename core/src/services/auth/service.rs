//! Main authentication service implementation

use std::sync::Arc;

use rc_shared::validation::mask_email;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::VerificationToken;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::mail::MailServiceTrait;
use crate::services::token::{RefreshTokenService, TokenService};

use super::commands::{LoginCommand, SignupCommand};
use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Authentication service for managing the complete authentication flow
pub struct AuthService<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailServiceTrait,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Refresh token issuing and revocation
    refresh_tokens: Arc<RefreshTokenService<T>>,
    /// Access token signing
    token_service: Arc<TokenService>,
    /// Delivery of verification links
    mail_service: Arc<M>,
    /// Service configuration
    config: AuthServiceConfig,
    /// Hash checked when the username is unknown, at the configured cost
    dummy_hash: String,
}

impl<U, T, M> AuthService<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailServiceTrait,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `refresh_tokens` - Service for refresh token storage
    /// * `token_service` - Service for JWT access tokens
    /// * `mail_service` - Verification mail delivery
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        refresh_tokens: Arc<RefreshTokenService<T>>,
        token_service: Arc<TokenService>,
        mail_service: Arc<M>,
        config: AuthServiceConfig,
    ) -> Self {
        let dummy_hash = hash_password("unknown-user-placeholder", config.bcrypt_cost)
            .unwrap_or_default();

        Self {
            user_repository,
            refresh_tokens,
            token_service,
            mail_service,
            config,
            dummy_hash,
        }
    }

    #[cfg(test)]
    pub(crate) fn dummy_hash(&self) -> &str {
        &self.dummy_hash
    }

    /// Register a new, disabled account and mail its verification link
    ///
    /// This method:
    /// 1. Rejects the command if the username or email is already taken,
    ///    naming every conflicting field
    /// 2. Stores the user and its verification token in one transaction
    /// 3. Sends the verification link; a delivery failure is logged only
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created (still disabled) user
    /// * `Err(DomainError::Auth(AuthError::AlreadyInUse { .. }))` - Identity taken,
    ///   including when a concurrent signup wins the race
    pub async fn signup(&self, command: SignupCommand) -> DomainResult<User> {
        command.validate()?;

        let mut conflicts = Vec::new();
        if self.user_repository.exists_by_username(&command.username).await? {
            conflicts.push("username".to_string());
        }
        if self.user_repository.exists_by_email(&command.email).await? {
            conflicts.push("email".to_string());
        }
        if !conflicts.is_empty() {
            return Err(AuthError::AlreadyInUse { fields: conflicts }.into());
        }

        let password_hash = hash_password(&command.password, self.config.bcrypt_cost)?;
        let user = User::new(command.username, command.email, password_hash);
        let token = VerificationToken::for_user(user.id);
        let link = self.config.verification_link(&token.token);

        let user = self
            .user_repository
            .create_with_verification_token(user, token)
            .await?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            "Account created, awaiting verification"
        );

        match self
            .mail_service
            .send_verification_email(&user.email, &user.username, &link)
            .await
        {
            Ok(message_id) => {
                tracing::debug!(user_id = %user.id, message_id = %message_id, "Verification mail sent");
            }
            Err(error) => {
                tracing::warn!(user_id = %user.id, error = %error, "Failed to send verification mail");
            }
        }

        Ok(user)
    }

    /// Consume a verification token and enable its account
    pub async fn verify_account(&self, token: &str) -> DomainResult<User> {
        let user = self
            .user_repository
            .enable_with_verification_token(token)
            .await?
            .ok_or(DomainError::Auth(AuthError::VerificationTokenNotFound))?;

        tracing::info!(user_id = %user.id, "Account verified");
        Ok(user)
    }

    /// Authenticate with username and password
    ///
    /// A disabled account is reported as such before the password is checked,
    /// so the outcome for an unverified account does not reveal whether the
    /// password was right. An unknown username still pays for one bcrypt
    /// verification.
    pub async fn login(&self, command: LoginCommand) -> DomainResult<AuthResponse> {
        let Some(user) = self
            .user_repository
            .find_by_username(&command.username)
            .await?
        else {
            let _ = verify_password(&command.password, &self.dummy_hash);
            return Err(AuthError::BadCredentials.into());
        };

        if !user.is_enabled() {
            tracing::debug!(user_id = %user.id, "Login attempt on unverified account");
            return Err(AuthError::AccountDisabled.into());
        }

        if !verify_password(&command.password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AuthError::BadCredentials.into());
        }

        let access = self.token_service.issue(&user.username)?;
        let refresh_token = self.refresh_tokens.create(user.id).await?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(AuthResponse::new(access, refresh_token, user.username))
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token itself is not rotated; the same value is returned.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let record = self.refresh_tokens.lookup(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_id(record.user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::RefreshTokenNotFound))?;

        if !user.is_enabled() {
            return Err(AuthError::AccountDisabled.into());
        }

        let access = self.token_service.issue(&user.username)?;
        tracing::debug!(user_id = %user.id, "Access token refreshed");

        Ok(AuthResponse::new(access, refresh_token.to_string(), user.username))
    }

    /// Revoke a refresh token; succeeds whether or not it existed
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        let removed = self.refresh_tokens.delete(refresh_token).await?;
        tracing::debug!(removed, "Refresh token deleted");
        Ok(())
    }

    pub async fn exists_by_username(&self, username: &str) -> DomainResult<bool> {
        self.user_repository.exists_by_username(username).await
    }

    pub async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        self.user_repository.exists_by_email(email).await
    }

    /// Load the account behind an authenticated username
    pub async fn current_user(&self, username: &str) -> DomainResult<User> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    /// Access token signer, shared with the HTTP authentication middleware
    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }
}
