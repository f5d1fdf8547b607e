//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it with the core [`TokenService`] and injects the caller's
//! [`AuthContext`] into the request extensions. Verification is purely
//! cryptographic; no store is consulted.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use rc_core::{
    domain::entities::token::Claims,
    errors::{DomainError, TokenError},
    services::token::TokenService,
};
use rc_shared::errors::{error_codes, ErrorResponse};

/// Authenticated caller, injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Username from the `sub` claim
    pub username: String,
    /// JWT ID for tracing
    pub jti: String,
    /// Expiry as a unix timestamp
    pub expires_at: i64,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            jti: claims.jti,
            expires_at: claims.exp,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(reject(
                        req,
                        error_codes::UNAUTHORIZED,
                        "Missing or invalid Authorization header",
                    ));
                }
            };

            let claims = match token_service.validate(&token) {
                Ok(claims) => claims,
                Err(error) => {
                    tracing::debug!(error = %error, "Access token rejected");
                    let (code, message) = match error {
                        DomainError::Token(TokenError::TokenExpired) => {
                            (error_codes::TOKEN_EXPIRED, "Token has expired")
                        }
                        _ => (error_codes::TOKEN_INVALID, "Invalid token"),
                    };
                    return Ok(reject(req, code, message));
                }
            };

            req.extensions_mut().insert(AuthContext::from(claims));

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Short-circuits the request with a 401 `ErrorResponse`
fn reject<B>(req: ServiceRequest, code: &str, message: &str) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Unauthorized().json(ErrorResponse::new(code, message));
    req.into_response(response).map_into_right_body()
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

fn unauthorized(code: &str, message: &'static str) -> Error {
    let body = ErrorResponse::new(code, message);
    InternalError::from_response(message, HttpResponse::Unauthorized().json(body)).into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized(error_codes::UNAUTHORIZED, "Authentication required"));

        ready(result)
    }
}
