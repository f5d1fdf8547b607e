//! Single-use token proving ownership of the email address given at signup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Verification token created together with its user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    pub id: Uuid,

    /// Owner of the token
    pub user_id: Uuid,

    /// Random token value (UUID v4 text) embedded in the verification link
    pub token: String,

    pub created_at: DateTime<Utc>,
}

impl VerificationToken {
    /// Generates a fresh token for the given user
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }
}
