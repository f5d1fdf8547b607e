use actix_web::{web, HttpResponse};

use rc_core::errors::{AuthError, DomainError};
use rc_core::repositories::{TokenRepository, UserRepository};
use rc_core::services::auth::SignupCommand;
use rc_core::services::mail::MailServiceTrait;
use rc_shared::errors::FieldError;
use rc_shared::types::MessageResponse;

use crate::dto::SignupRequest;
use crate::handlers::{handle_domain_error, validate_request, validation_failed};

use super::AppState;

pub const SIGNUP_SUCCESS_MESSAGE: &str =
    "Account created successfully, please check your inbox to activate your account";

/// Handler for POST /api/auth/signup
///
/// Creates a disabled account and mails its activation link.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "email": "alice@example.com",
///     "password": "password123"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "message": "Account created successfully, please check your inbox to activate your account" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Field errors, including `"<value> in use"` for a taken
///   username or email
/// - 500 Internal Server Error: Storage failure
pub async fn signup<U, T, M>(
    state: web::Data<AppState<U, T, M>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let request = request.into_inner();

    let mut fields = validate_request(&request);

    if !has_field(&fields, "username") {
        match state.auth_service.exists_by_username(&request.username).await {
            Ok(true) => fields.push(in_use("username", &request.username)),
            Ok(false) => {}
            Err(error) => return handle_domain_error(error),
        }
    }
    if !has_field(&fields, "email") {
        match state.auth_service.exists_by_email(&request.email).await {
            Ok(true) => fields.push(in_use("email", &request.email)),
            Ok(false) => {}
            Err(error) => return handle_domain_error(error),
        }
    }

    if !fields.is_empty() {
        return validation_failed(fields);
    }

    let command = SignupCommand {
        username: request.username.clone(),
        email: request.email.clone(),
        password: request.password,
    };

    match state.auth_service.signup(command).await {
        Ok(_) => HttpResponse::Created().json(MessageResponse::new(SIGNUP_SUCCESS_MESSAGE)),
        // Lost a race against a concurrent signup
        Err(DomainError::Auth(AuthError::AlreadyInUse { fields })) => validation_failed(
            fields
                .iter()
                .map(|field| match field.as_str() {
                    "username" => in_use("username", &request.username),
                    "email" => in_use("email", &request.email),
                    other => FieldError::new(other, format!("{} in use", other)),
                })
                .collect(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

fn has_field(fields: &[FieldError], name: &str) -> bool {
    fields.iter().any(|f| f.field == name)
}

fn in_use(field: &str, value: &str) -> FieldError {
    FieldError::new(field, format!("{} in use", value))
}
