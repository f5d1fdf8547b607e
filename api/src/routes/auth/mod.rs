//! Authentication route handlers
//!
//! This module contains all authentication endpoints:
//! - Signup and email verification
//! - Login
//! - Token refresh
//! - Logout
//! - The authenticated account (`/me`)

pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod signup;
pub mod verify_account;

use std::sync::Arc;

use rc_core::repositories::{TokenRepository, UserRepository};
use rc_core::services::auth::AuthService;
use rc_core::services::mail::MailServiceTrait;

/// Application state that holds shared services
pub struct AppState<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailServiceTrait,
{
    pub auth_service: Arc<AuthService<U, T, M>>,
}

impl<U, T, M> AppState<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailServiceTrait,
{
    pub fn new(auth_service: Arc<AuthService<U, T, M>>) -> Self {
        Self { auth_service }
    }
}
