//! Request validation ahead of dispatch
//!
//! Every failing field is reported, not only the first one.

use actix_web::HttpResponse;
use validator::Validate;

use rc_shared::errors::{error_codes, ErrorResponse, FieldError};

/// Run the derived validators and collect one entry per failing rule
pub fn validate_request<T: Validate>(request: &T) -> Vec<FieldError> {
    let Err(errors) = request.validate() else {
        return Vec::new();
    };

    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            let field = field.to_string();
            failures.iter().map(move |failure| {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| failure.code.to_string());
                FieldError::new(field.clone(), message)
            })
        })
        .collect();

    // field_errors() is a HashMap
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// 400 response listing the field errors
pub fn validation_failed(fields: Vec<FieldError>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::with_fields(
        error_codes::VALIDATION_ERROR,
        "Validation failed",
        fields,
    ))
}
