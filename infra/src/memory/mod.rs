//! In-memory repositories
//!
//! Same contracts as the MySQL implementations, held in process memory behind
//! a `tokio::sync::RwLock`. Used by the HTTP integration tests and for running
//! the server without a database.

mod token_repository;
mod user_repository;

pub use token_repository::InMemoryTokenRepository;
pub use user_repository::InMemoryUserRepository;
