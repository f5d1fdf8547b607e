//! Type definitions shared by the HTTP layer
//!
//! - `response` - message and health response bodies

pub mod response;

pub use response::{HealthResponse, HealthStatus, MessageResponse};
