//! Business services containing domain logic and use cases.

pub mod auth;
pub mod mail;
pub mod token;

// Re-export commonly used types
pub use auth::{
    hash_password, verify_password, AuthService, AuthServiceConfig, LoginCommand, SignupCommand,
};
pub use mail::{MailServiceTrait, VerificationEmail};
pub use token::{RefreshTokenService, TokenService, TokenServiceConfig};
