//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("SERVER_HOST", &defaults.host),
            port: env_parse("SERVER_PORT", defaults.port),
            workers: env_parse("SERVER_WORKERS", defaults.workers),
            ..defaults
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    pub allowed_origins: Vec<String>,

    /// Preflight cache duration in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from("http://localhost:4200")],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create from environment variables (comma separated `CORS_ALLOWED_ORIGINS`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Self {
            allowed_origins,
            ..defaults
        }
    }

    /// Whether any origin is accepted
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

fn default_max_payload_size() -> usize {
    64 * 1024 // 64 KiB
}

fn default_max_age() -> usize {
    3600
}
