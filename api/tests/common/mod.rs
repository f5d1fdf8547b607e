//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use rc_api::routes::auth::AppState;
use rc_core::services::{
    AuthService, AuthServiceConfig, RefreshTokenService, TokenService, TokenServiceConfig,
};
use rc_infra::{InMemoryMailService, InMemoryTokenRepository, InMemoryUserRepository};

pub type TestState = AppState<InMemoryUserRepository, InMemoryTokenRepository, InMemoryMailService>;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ISSUER: &str = "reddit-clone";

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<InMemoryUserRepository>,
    pub tokens: Arc<InMemoryTokenRepository>,
    pub mail: InMemoryMailService,
    pub token_service: Arc<TokenService>,
}

pub fn token_config(expiry_seconds: i64) -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        access_token_expiry_seconds: expiry_seconds,
    }
}

pub fn create_context() -> TestContext {
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(InMemoryTokenRepository::new());
    let mail = InMemoryMailService::new();
    let token_service = Arc::new(TokenService::new(token_config(900)));

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        Arc::new(RefreshTokenService::new(tokens.clone())),
        token_service.clone(),
        Arc::new(mail.clone()),
        AuthServiceConfig {
            bcrypt_cost: 4,
            verification_base_url: "http://localhost:8080/api/auth/account-verification"
                .to_string(),
        },
    ));

    TestContext {
        state: web::Data::new(AppState::new(auth_service)),
        users,
        tokens,
        mail,
        token_service,
    }
}

/// Token part of a mailed verification link
pub fn token_from_link(link: &str) -> String {
    link.rsplit('/').next().unwrap_or_default().to_string()
}

/// Call the service and decode the JSON body
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}
