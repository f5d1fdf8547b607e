//! CORS middleware configuration for cross-origin requests.
//!
//! The web client is served from a different origin than the API, so the
//! allowed origins come from [`CorsConfig`]. A single `*` entry opens the API
//! to any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use rc_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        return cors.allow_any_origin();
    }

    for origin in config.allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            tracing::debug!(origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    cors.supports_credentials()
}
