//! Outgoing mail configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Which mail service implementation the server wires up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Write outgoing mail to the application log
    #[default]
    Log,
    /// Keep outgoing mail in an in-process outbox
    Memory,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" | "console" => Ok(MailProvider::Log),
            "memory" | "mock" => Ok(MailProvider::Memory),
            _ => Err(format!("Unknown mail provider: {}", s)),
        }
    }
}

/// Mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Provider used to dispatch notifications
    #[serde(default)]
    pub provider: MailProvider,

    /// Sender address
    pub from: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::default(),
            from: String::from("no-reply@reddit-clone.local"),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("MAIL_PROVIDER")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.provider),
            from: env_or("MAIL_FROM", &defaults.from),
        }
    }
}
