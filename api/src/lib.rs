//! HTTP boundary of the Reddit clone backend
//!
//! Exposed as a library so integration tests can build the same
//! [`app::create_app`] the binary serves.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
