//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository and mail traits:
//! - **Database**: MySQL implementations using SQLx, with embedded migrations
//! - **Memory**: in-process repositories for tests and local runs
//! - **Mail**: verification mail delivery (log output or in-memory outbox)
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// In-memory repository implementations
pub mod memory;

/// Mail service implementations
pub mod mail;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlTokenRepository, MySqlUserRepository};
pub use mail::{InMemoryMailService, LogMailService, MailService, OutboxEntry};
pub use memory::{InMemoryTokenRepository, InMemoryUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
