//! Verification mail delivery
//!
//! Real SMTP delivery is out of scope; the server either writes the mail to
//! the log or keeps it in an in-memory outbox.

mod log_mail;
mod memory_mail;

pub use log_mail::LogMailService;
pub use memory_mail::{InMemoryMailService, OutboxEntry};

use async_trait::async_trait;

use rc_core::services::mail::MailServiceTrait;
use rc_shared::config::{MailConfig, MailProvider};

/// Mail service selected from configuration
pub enum MailService {
    Log(LogMailService),
    Memory(InMemoryMailService),
}

impl MailService {
    pub fn from_config(config: &MailConfig) -> Self {
        match config.provider {
            MailProvider::Log => MailService::Log(LogMailService::new(config.from.clone())),
            MailProvider::Memory => MailService::Memory(InMemoryMailService::new()),
        }
    }
}

#[async_trait]
impl MailServiceTrait for MailService {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        link: &str,
    ) -> Result<String, String> {
        match self {
            MailService::Log(service) => service.send_verification_email(email, username, link).await,
            MailService::Memory(service) => {
                service.send_verification_email(email, username, link).await
            }
        }
    }
}
