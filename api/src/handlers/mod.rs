pub mod error_handler;
pub mod validation;

pub use error_handler::handle_domain_error;
pub use validation::{validate_request, validation_failed};
