use actix_web::{web, HttpResponse};

use rc_core::repositories::{TokenRepository, UserRepository};
use rc_core::services::mail::MailServiceTrait;
use rc_shared::types::MessageResponse;

use crate::dto::RefreshTokenRequest;
use crate::handlers::{handle_domain_error, validate_request, validation_failed};

use super::AppState;

pub const LOGOUT_SUCCESS_MESSAGE: &str = "Refresh Token Deleted Successfully!";

/// Handler for POST /api/auth/logout
///
/// Deletes the presented refresh token. Succeeds even when the token was
/// already gone; access tokens stay valid until they expire.
///
/// ## Errors
/// - 400 Bad Request: Missing refresh token
pub async fn logout<U, T, M>(
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

    match state.auth_service.logout(&request.refresh_token).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(LOGOUT_SUCCESS_MESSAGE)),
        Err(error) => handle_domain_error(error),
    }
}
