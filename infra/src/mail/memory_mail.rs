use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use rc_core::services::mail::{MailServiceTrait, VerificationEmail};

/// A mail accepted by [`InMemoryMailService`]
#[derive(Debug, Clone)]
pub struct OutboxEntry {
    pub message_id: String,
    pub link: String,
    pub mail: VerificationEmail,
}

/// Collects verification mails in memory
#[derive(Clone, Default)]
pub struct InMemoryMailService {
    outbox: Arc<RwLock<Vec<OutboxEntry>>>,
}

impl InMemoryMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, oldest first
    pub async fn sent(&self) -> Vec<OutboxEntry> {
        self.outbox.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.outbox.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.outbox.read().await.is_empty()
    }

    /// Link from the most recent mail sent to `email`
    pub async fn last_link_for(&self, email: &str) -> Option<String> {
        self.outbox
            .read()
            .await
            .iter()
            .rev()
            .find(|entry| entry.mail.recipient == email)
            .map(|entry| entry.link.clone())
    }
}

#[async_trait]
impl MailServiceTrait for InMemoryMailService {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        link: &str,
    ) -> Result<String, String> {
        let message_id = Uuid::new_v4().to_string();
        self.outbox.write().await.push(OutboxEntry {
            message_id: message_id.clone(),
            link: link.to_string(),
            mail: VerificationEmail::new(email, username, link),
        });
        tracing::debug!(message_id = %message_id, "Verification mail queued in memory");
        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outbox_records_mail() {
        let service = InMemoryMailService::new();
        assert!(service.is_empty().await);

        let id = service
            .send_verification_email("alice@example.com", "alice", "http://host/verify/1")
            .await
            .unwrap();
        service
            .send_verification_email("alice@example.com", "alice", "http://host/verify/2")
            .await
            .unwrap();

        let sent = service.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].message_id, id);
        assert_eq!(sent[0].mail.subject, "Please activate your account");
        assert_eq!(
            service.last_link_for("alice@example.com").await.as_deref(),
            Some("http://host/verify/2")
        );
        assert!(service.last_link_for("bob@example.com").await.is_none());
    }
}
