//! JWT access token issuing and validation

use chrono::{TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Mints and verifies signed access tokens
///
/// Validation is purely cryptographic (signature, expiry, issuer); no store
/// is consulted, so an access token stays valid until it expires.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }

    /// Issues an access token whose subject is `subject`
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token and its expiry
    /// * `Err(DomainError::Token(TokenError::TokenGenerationFailed))` - Signing failed
    ///   or the configured lifetime overflows the clock
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, DomainError> {
        let claims = Claims::new_access_token(
            subject,
            &self.config.issuer,
            self.config.access_token_expiry_seconds,
        )
        .ok_or(DomainError::Token(TokenError::TokenGenerationFailed))?;
        let token = self.encode_claims(&claims)?;
        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or(DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(IssuedToken {
            token,
            expires_at,
            expires_in: self.config.access_token_expiry_seconds,
        })
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature, expiry and issuer all check out
    /// * `Err(TokenError::TokenExpired)` - Past its expiry
    /// * `Err(TokenError::InvalidToken)` - Bad signature, wrong issuer or malformed
    pub fn validate(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                _ => DomainError::Token(TokenError::InvalidToken),
            })
    }

    /// Validates a token and returns its subject (the username)
    pub fn subject(&self, token: &str) -> Result<String, DomainError> {
        self.validate(token).map(|claims| claims.sub)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
