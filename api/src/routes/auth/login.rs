use actix_web::{web, HttpResponse};

use rc_core::repositories::{TokenRepository, UserRepository};
use rc_core::services::auth::LoginCommand;
use rc_core::services::mail::MailServiceTrait;

use crate::dto::{AuthResponse, LoginRequest};
use crate::handlers::{handle_domain_error, validate_request, validation_failed};

use super::AppState;

/// Handler for POST /api/auth/login
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "password123"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "k3Jd...",
///     "expires_in": 900,
///     "expires_at": "2025-01-01T00:15:00Z",
///     "username": "alice"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `Bad Credentials`, `Disabled Account` or field errors
pub async fn login<U, T, M>(
    state: web::Data<AppState<U, T, M>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let request = request.into_inner();

    let fields = validate_request(&request);
    if !fields.is_empty() {
        return validation_failed(fields);
    }

    let command = LoginCommand {
        username: request.username,
        password: request.password,
    };

    match state.auth_service.login(command).await {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
