//! Token service module
//!
//! - `service` - JWT access token issuing and validation
//! - `refresh` - opaque refresh tokens persisted as SHA-256 hashes

mod config;
mod refresh;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use refresh::RefreshTokenService;
pub use service::TokenService;
