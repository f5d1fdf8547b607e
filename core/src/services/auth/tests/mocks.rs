//! Mock implementations for testing authentication service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::repositories::{MockTokenRepository, MockUserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::mail::MailServiceTrait;
use crate::services::token::{RefreshTokenService, TokenService, TokenServiceConfig};

/// A mail captured by [`MockMailService`]
#[derive(Debug, Clone)]
pub struct SentMail {
    pub email: String,
    pub username: String,
    pub link: String,
}

pub struct MockMailService {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    pub should_fail: bool,
}

impl MockMailService {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn last_link(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|m| m.link.clone())
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        link: &str,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("SMTP connection refused".to_string());
        }
        self.sent.lock().unwrap().push(SentMail {
            email: email.to_string(),
            username: username.to_string(),
            link: link.to_string(),
        });
        Ok(format!("msg-{}", self.sent.lock().unwrap().len()))
    }
}

pub type TestAuthService = AuthService<MockUserRepository, MockTokenRepository, MockMailService>;

pub struct TestContext {
    pub service: TestAuthService,
    pub users: Arc<MockUserRepository>,
    pub tokens: Arc<MockTokenRepository>,
    pub mail: Arc<MockMailService>,
    pub token_service: Arc<TokenService>,
}

pub fn test_config() -> AuthServiceConfig {
    AuthServiceConfig {
        bcrypt_cost: 4,
        verification_base_url: "http://localhost:8080/api/auth/account-verification".to_string(),
    }
}

pub fn create_context_with_mail(mail: MockMailService) -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(MockTokenRepository::new());
    let mail = Arc::new(mail);
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "test_secret_key_for_testing_only".to_string(),
        ..TokenServiceConfig::default()
    }));

    let service = AuthService::new(
        users.clone(),
        Arc::new(RefreshTokenService::new(tokens.clone())),
        token_service.clone(),
        mail.clone(),
        test_config(),
    );

    TestContext {
        service,
        users,
        tokens,
        mail,
        token_service,
    }
}

pub fn create_context() -> TestContext {
    create_context_with_mail(MockMailService::new())
}
