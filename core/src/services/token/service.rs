//! Token service: signing and decoding of stateless bearer tokens

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenConfig;

/// Service for issuing and decoding signed tokens
///
/// Tokens are self-contained and never persisted: validity is determined
/// purely by signature and expiry at verification time. Decoding is the
/// cryptographic half of the gate; the authoritative-state half lives in
/// [`crate::services::auth::AuthGate`].
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from immutable configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is exact: a token one second past its expiry is rejected.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a signed token for a user
    ///
    /// The claim set snapshots the user's role, registration number and
    /// primary country at issuance; the gate refreshes them from storage on
    /// every verification.
    pub fn issue(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new(user, self.config.expiry_minutes);
        self.encode(&claims)
    }

    /// Encode a claim set into a signed token
    pub(crate) fn encode(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Decode and validate a token, returning its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid and not expired
    /// * `Err(TokenError::TokenExpired)` - Past the embedded expiry
    /// * `Err(TokenError::InvalidSignature)` - Signature check failed
    /// * `Err(TokenError::InvalidTokenFormat)` - Malformed token
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::Token(TokenError::TokenExpired)
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    DomainError::Token(TokenError::InvalidSignature)
                }
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })
    }
}
