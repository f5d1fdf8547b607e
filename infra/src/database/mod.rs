//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and migrations
//! - Repository implementations
//! - Transactions for writes that must land together

pub mod connection;
pub mod mysql;


pub use connection::DatabasePool;
pub use mysql::{MySqlTokenRepository, MySqlUserRepository};
