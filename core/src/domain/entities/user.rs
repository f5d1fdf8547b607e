//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// Accounts start disabled and are enabled exactly once, when the owner
/// follows the verification link sent at signup. Users are never hard deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Public handle, unique across all users
    pub username: String,

    /// Contact address, unique across all users
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the email address has been verified
    pub enabled: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, not yet verified user
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            enabled: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account as verified
    pub fn enable(&mut self) {
        self.enabled = true;
        self.updated_at = Utc::now();
    }

    /// Whether the account may log in
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
