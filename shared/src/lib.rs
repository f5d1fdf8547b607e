//! Shared utilities and common types for the Reddit clone server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Validation helpers (usernames, emails, masking for logs)
//! - Common response types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LogFormat, LoggingConfig, MailConfig, MailProvider, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse, FieldError};
pub use types::{HealthResponse, HealthStatus, MessageResponse};
pub use utils::validation;
