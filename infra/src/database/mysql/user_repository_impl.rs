//! MySQL implementation of the UserRepository trait.
//!
//! Users and their verification tokens are written in shared transactions;
//! uniqueness of username and email is enforced by the `uk_users_*` keys.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rc_core::domain::entities::user::User;
use rc_core::domain::entities::verification_token::VerificationToken;
use rc_core::errors::DomainError;
use rc_core::repositories::UserRepository;

use super::{db_error, map_user_write_error};

const USER_COLUMNS: &str = "id, username, email, password_hash, enabled, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::internal(format!("Failed to get username: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::internal(format!("Failed to get password_hash: {}", e)))?,
            enabled: row
                .try_get("enabled")
                .map_err(|e| DomainError::internal(format!("Failed to get enabled: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    async fn exists_where(&self, column: &str, value: &str) -> Result<bool, DomainError> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM users WHERE {} = ?) AS found",
            column
        );
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check user existence"))?;

        let found: i64 = row
            .try_get("found")
            .map_err(|e| DomainError::internal(format!("Failed to get existence result: {}", e)))?;
        Ok(found == 1)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Database query failed"))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE username = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Database query failed"))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        self.exists_where("username", username).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.exists_where("email", email).await
    }

    async fn create_with_verification_token(
        &self,
        user: User,
        token: VerificationToken,
    ) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, enabled, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.enabled)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_user_write_error)?;

        sqlx::query(
            r#"
            INSERT INTO verification_tokens (id, user_id, token, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(token.id.to_string())
        .bind(token.user_id.to_string())
        .bind(&token.token)
        .bind(token.created_at)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to save verification token"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit signup"))?;

        Ok(user)
    }

    async fn enable_with_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<User>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let row = sqlx::query("SELECT user_id FROM verification_tokens WHERE token = ? FOR UPDATE")
            .bind(token)
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to find verification token"))?;

        let Some(row) = row else {
            // Dropping the transaction rolls it back
            return Ok(None);
        };
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;

        sqlx::query("DELETE FROM verification_tokens WHERE token = ?")
            .bind(token)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to consume verification token"))?;

        sqlx::query("UPDATE users SET enabled = TRUE, updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(&user_id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to enable user"))?;

        let query = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
        let user = sqlx::query(&query)
            .bind(&user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to load verified user"))?
            .as_ref()
            .map(Self::row_to_user)
            .transpose()?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit verification"))?;

        Ok(user)
    }
}
