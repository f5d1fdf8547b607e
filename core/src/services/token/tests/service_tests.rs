//! Unit tests for the access token service

use chrono::Utc;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test_secret_key_for_testing_only".to_string(),
        issuer: "reddit-clone".to_string(),
        access_token_expiry_seconds: 900,
    })
}

#[test]
fn test_issue_then_validate_returns_subject() {
    let service = create_test_service();

    let issued = service.issue("alice").unwrap();
    let claims = service.validate(&issued.token).unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.iss, "reddit-clone");
    assert_eq!(service.subject(&issued.token).unwrap(), "alice");
}

#[test]
fn test_issued_expiry_matches_configuration() {
    let service = create_test_service();
    let before = Utc::now().timestamp();

    let issued = service.issue("alice").unwrap();

    assert_eq!(issued.expires_in, 900);
    let expires_at = issued.expires_at.timestamp();
    assert!(expires_at >= before + 900);
    assert!(expires_at <= Utc::now().timestamp() + 900);
}

#[test]
fn test_expired_token_is_rejected_as_expired() {
    let service = create_test_service();
    let claims = Claims::new_access_token("alice", "reddit-clone", -120).unwrap();
    let token = service.encode_claims(&claims).unwrap();

    let result = service.validate(&token);

    assert!(matches!(result, Err(DomainError::Token(TokenError::TokenExpired))));
}

#[test]
fn test_token_signed_with_other_secret_is_invalid() {
    let service = create_test_service();
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "a_completely_different_secret".to_string(),
        ..TokenServiceConfig::default()
    });
    let token = other.issue("alice").unwrap().token;

    let result = service.validate(&token);

    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidToken))));
}

#[test]
fn test_wrong_issuer_is_invalid() {
    let service = create_test_service();
    let claims = Claims::new_access_token("alice", "someone-else", 900).unwrap();
    let token = service.encode_claims(&claims).unwrap();

    assert!(matches!(
        service.validate(&token),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_oversized_lifetime_fails_instead_of_panicking() {
    let service = TokenService::new(TokenServiceConfig {
        access_token_expiry_seconds: 100_000_000_000_000_000,
        ..TokenServiceConfig::default()
    });

    assert!(matches!(
        service.issue("alice"),
        Err(DomainError::Token(TokenError::TokenGenerationFailed))
    ));
}

#[test]
fn test_garbage_is_invalid() {
    let service = create_test_service();

    for input in ["", "not-a-jwt", "a.b.c"] {
        assert!(matches!(
            service.validate(input),
            Err(DomainError::Token(TokenError::InvalidToken))
        ));
    }
}

#[test]
fn test_tampered_payload_is_invalid() {
    let service = create_test_service();
    let token = service.issue("alice").unwrap().token;
    let mut parts: Vec<&str> = token.split('.').collect();
    let forged = service.issue("mallory").unwrap().token;
    let forged_payload = forged.split('.').nth(1).unwrap().to_string();
    parts[1] = &forged_payload;

    let tampered = parts.join(".");

    assert!(service.validate(&tampered).is_err());
}
