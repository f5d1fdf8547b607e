//! Domain entities representing core business objects.

pub mod token;
pub mod user;
pub mod verification_token;

// Re-export commonly used types
pub use token::{
    Claims, IssuedToken, RefreshToken, DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS, REFRESH_TOKEN_LENGTH,
};
pub use user::User;
pub use verification_token::VerificationToken;
