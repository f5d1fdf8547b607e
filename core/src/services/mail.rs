//! Verification mail boundary
//!
//! The domain only decides *that* a verification mail goes out and what link
//! it carries. Delivery lives behind [`MailServiceTrait`] in the infrastructure
//! layer.

use async_trait::async_trait;

pub const VERIFICATION_EMAIL_SUBJECT: &str = "Please activate your account";

/// Trait for mail service integration
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send the account activation mail, returning a provider message id
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        link: &str,
    ) -> Result<String, String>;
}

/// Rendered activation mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl VerificationEmail {
    pub fn new(recipient: &str, username: &str, link: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: VERIFICATION_EMAIL_SUBJECT.to_string(),
            body: format!(
                "Hi {},\n\nThank you for signing up. Please click on the link below to activate your account:\n{}\n",
                username, link
            ),
        }
    }
}
