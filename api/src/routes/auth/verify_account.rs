use actix_web::{web, HttpResponse};

use rc_core::repositories::{TokenRepository, UserRepository};
use rc_core::services::mail::MailServiceTrait;
use rc_shared::types::MessageResponse;

use crate::handlers::handle_domain_error;

use super::AppState;

pub const ACCOUNT_ACTIVATED_MESSAGE: &str = "Account activated successfully, now you can Log In";

/// Handler for GET /api/auth/account-verification/{token}
///
/// The link mailed at signup points here. Consumes the token and enables the
/// account.
///
/// ## Errors
/// - 404 Not Found: Unknown or already used token
pub async fn verify_account<U, T, M>(
    state: web::Data<AppState<U, T, M>>,
    token: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + 'static,
{
    match state.auth_service.verify_account(&token).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new(ACCOUNT_ACTIVATED_MESSAGE)),
        Err(error) => handle_domain_error(error),
    }
}
