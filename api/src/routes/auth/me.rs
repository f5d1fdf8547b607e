use actix_web::{http::StatusCode, web, HttpResponse};

use rc_core::errors::{AuthError, DomainError};
use rc_core::repositories::{TokenRepository, UserRepository};
use rc_core::services::mail::MailServiceTrait;
use rc_shared::errors::{error_codes, ErrorResponse};

use crate::dto::MeResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

use super::AppState;

/// Handler for GET /api/auth/me
///
/// Requires a bearer access token.
pub async fn me<U, T, M>(state: web::Data<AppState<U, T, M>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + 'static,
{
    match state.auth_service.current_user(&auth.username).await {
        Ok(user) => HttpResponse::Ok().json(MeResponse::from(user)),
        // A valid token for an account that no longer exists
        Err(DomainError::Auth(AuthError::UserNotFound)) => HttpResponse::build(StatusCode::UNAUTHORIZED)
            .json(ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication required")),
        Err(error) => handle_domain_error(error),
    }
}
