//! HTTP-layer settings and process-wide logging setup

use actix_web::{error::InternalError, web, HttpResponse};
use tracing_subscriber::EnvFilter;

use rc_shared::config::{AppConfig, CorsConfig, LogFormat, LoggingConfig, ServerConfig};
use rc_shared::errors::{error_codes, ErrorResponse};

/// Settings [`crate::app::create_app`] needs from the application config
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub cors: CorsConfig,
    pub max_payload_size: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            cors: CorsConfig::default(),
            max_payload_size: ServerConfig::default().max_payload_size,
        }
    }
}

impl From<&AppConfig> for HttpSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            cors: config.cors.clone(),
            max_payload_size: config.server.max_payload_size,
        }
    }
}

/// JSON extractor config rejecting malformed bodies with an `ErrorResponse`
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let body = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string());
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}

/// Install the global tracing subscriber
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    match config.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
