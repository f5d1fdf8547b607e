//! MySQL implementation of the TokenRepository trait.
//!
//! Rows hold the SHA-256 hash of the refresh token, never the raw value.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rc_core::domain::entities::token::RefreshToken;
use rc_core::errors::DomainError;
use rc_core::repositories::TokenRepository;

use super::db_error;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid token UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| DomainError::internal(format!("Failed to get token_hash: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (id, user_id, token_hash, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(token.id.to_string())
        .bind(token.user_id.to_string())
        .bind(&token.token_hash)
        .bind(token.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to save refresh token"))?;

        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let result = sqlx::query(
            r#"
            SELECT id, user_id, token_hash, created_at
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find refresh token"))?;

        result.as_ref().map(Self::row_to_token).transpose()
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, token_hash, created_at
            FROM refresh_tokens
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to find user tokens"))?;

        rows.iter().map(Self::row_to_token).collect()
    }

    async fn delete_refresh_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete refresh token"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete user tokens"))?;

        Ok(result.rows_affected() as usize)
    }
}
