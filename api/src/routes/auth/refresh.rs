use actix_web::{web, HttpResponse};

use rc_core::repositories::{TokenRepository, UserRepository};
use rc_core::services::mail::MailServiceTrait;

use crate::dto::{AuthResponse, RefreshTokenRequest};
use crate::handlers::{handle_domain_error, validate_request, validation_failed};

use super::AppState;

/// Handler for POST /api/auth/refresh-token
///
/// Exchanges a refresh token for a new access token. The refresh token is
/// returned unchanged.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "string"
/// }
/// ```
///
/// ## Errors
/// - 404 Not Found: Unknown or deleted refresh token
/// - 400 Bad Request: Missing value or disabled account
pub async fn refresh_token<U, T, M>(
    state: web::Data<AppState<U, T, M>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let fields = validate_request(&*request);
    if !fields.is_empty() {
        return validation_failed(fields);
    }

    match state.auth_service.refresh_token(&request.refresh_token).await {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
