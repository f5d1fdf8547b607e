//! Maps domain errors onto HTTP responses

use actix_web::{http::StatusCode, HttpResponse};

use rc_core::errors::{AuthError, DomainError, TokenError};
use rc_shared::errors::{error_codes, ErrorResponse, FieldError};

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, body) = error_response(&error);

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    HttpResponse::build(status).json(body)
}

fn error_response(error: &DomainError) -> (StatusCode, ErrorResponse) {
    match error {
        DomainError::Auth(auth) => auth_error_response(auth),
        DomainError::Token(token) => token_error_response(token),
        DomainError::ValidationErr(validation) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::with_fields(
                error_codes::VALIDATION_ERROR,
                "Validation failed",
                vec![FieldError::new(validation.field(), validation.to_string())],
            ),
        ),
        // Storage details stay in the log
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
        ),
    }
}

fn auth_error_response(error: &AuthError) -> (StatusCode, ErrorResponse) {
    match error {
        AuthError::AlreadyInUse { fields } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::with_fields(
                error_codes::VALIDATION_ERROR,
                "Validation failed",
                fields
                    .iter()
                    .map(|field| FieldError::new(field.clone(), format!("{} in use", field)))
                    .collect(),
            ),
        ),
        AuthError::BadCredentials => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::BAD_CREDENTIALS, error.to_string()),
        ),
        AuthError::AccountDisabled => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::ACCOUNT_DISABLED, error.to_string()),
        ),
        AuthError::VerificationTokenNotFound
        | AuthError::RefreshTokenNotFound
        | AuthError::UserNotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error_codes::NOT_FOUND, error.to_string()),
        ),
    }
}

fn token_error_response(error: &TokenError) -> (StatusCode, ErrorResponse) {
    match error {
        TokenError::TokenExpired => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::TOKEN_EXPIRED, error.to_string()),
        ),
        TokenError::InvalidToken => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::TOKEN_INVALID, error.to_string()),
        ),
        TokenError::TokenGenerationFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
        ),
    }
}
