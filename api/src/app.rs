//! Application factory
//!
//! Builds the Actix-web application shared by the binary and the
//! integration tests.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use rc_core::repositories::{TokenRepository, UserRepository};
use rc_core::services::mail::MailServiceTrait;
use rc_shared::errors::{error_codes, ErrorResponse};
use rc_shared::types::HealthResponse;

use crate::config::{json_config, HttpSettings};
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::auth::{
    login::login, logout::logout, me::me, refresh::refresh_token, signup::signup,
    verify_account::verify_account, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, T, M>(
    app_state: web::Data<AppState<U, T, M>>,
    settings: HttpSettings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let jwt_auth = JwtAuth::new(Arc::clone(app_state.auth_service.token_service()));
    let cors = create_cors(&settings.cors);

    App::new()
        .app_data(app_state)
        .app_data(json_config(settings.max_payload_size))
        // Registered last, so the request span wraps CORS
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/auth")
                .route("/signup", web::post().to(signup::<U, T, M>))
                .route("/login", web::post().to(login::<U, T, M>))
                .route(
                    "/account-verification/{token}",
                    web::get().to(verify_account::<U, T, M>),
                )
                .route("/refresh-token", web::post().to(refresh_token::<U, T, M>))
                .route("/logout", web::post().to(logout::<U, T, M>))
                .route("/me", web::get().to(me::<U, T, M>).wrap(jwt_auth)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "reddit-clone-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
