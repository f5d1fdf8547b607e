//! MySQL repository implementations

mod token_repository_impl;
mod user_repository_impl;

pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use rc_core::errors::{AuthError, DomainError};

/// Wraps a SQLx failure as an internal domain error
pub(crate) fn db_error(context: &str) -> impl Fn(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

/// Maps a failed user insert, turning unique-key violations into `AlreadyInUse`
pub(crate) fn map_user_write_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            let fields = conflicting_fields(db_err.message());
            return DomainError::Auth(AuthError::AlreadyInUse { fields });
        }
    }
    db_error("Failed to create user")(e)
}

/// Reads the violated key out of a MySQL duplicate-entry message,
/// e.g. `Duplicate entry 'bob' for key 'users.uk_users_username'`
pub(crate) fn conflicting_fields(message: &str) -> Vec<String> {
    let key = message.rsplit("for key").next().unwrap_or_default();
    let mut fields = Vec::new();
    if key.contains("username") {
        fields.push("username".to_string());
    }
    if key.contains("email") {
        fields.push("email".to_string());
    }
    if fields.is_empty() {
        fields.push("username".to_string());
        fields.push("email".to_string());
    }
    fields
}
