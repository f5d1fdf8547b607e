//! Authentication service module
//!
//! - Email-verified signup
//! - Login issuing an access token plus a refresh token
//! - Access token refresh and logout

mod commands;
mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use commands::{LoginCommand, SignupCommand};
pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::AuthService;
