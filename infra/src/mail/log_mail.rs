use async_trait::async_trait;
use uuid::Uuid;

use rc_core::services::mail::{MailServiceTrait, VerificationEmail};
use rc_shared::validation::mask_email;

/// Writes verification mails to the tracing log instead of sending them
pub struct LogMailService {
    from: String,
}

impl LogMailService {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl MailServiceTrait for LogMailService {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        link: &str,
    ) -> Result<String, String> {
        let mail = VerificationEmail::new(email, username, link);
        let message_id = Uuid::new_v4().to_string();

        tracing::info!(
            message_id = %message_id,
            from = %self.from,
            to = %mask_email(&mail.recipient),
            subject = %mail.subject,
            "Verification mail"
        );
        tracing::debug!(message_id = %message_id, link = %redact_link(link), "Verification link");

        Ok(message_id)
    }
}

/// Hides the token segment at the end of a verification link
fn redact_link(link: &str) -> String {
    match link.rsplit_once('/') {
        Some((base, _)) => format!("{}/***", base),
        None => "***".to_string(),
    }
}
