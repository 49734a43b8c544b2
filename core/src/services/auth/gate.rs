//! Request authentication gate
//!
//! Verification runs in two phases. The cryptographic phase decodes the
//! token and checks signature and expiry (pure, no I/O). The
//! authoritative-state phase re-fetches the user from the credential store
//! and overwrites the role, registration number and primary country claims
//! with the freshly fetched values, so a privilege change in storage takes
//! effect immediately even for tokens issued before it. This trades a store
//! round-trip per request for revocation-on-role-change semantics and must
//! not be short-circuited with a claims-only check.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Identity attached to a request once the gate has verified its token
///
/// Role, registration number and primary country come from the store, not
/// from the token body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestIdentity {
    pub user_id: i64,
    pub email: String,
    pub role: UserRole,
    pub reg_number: Option<String>,
    pub primary_country: String,
    /// Account creation timestamp as snapshotted at token issuance
    pub account_created_at: DateTime<Utc>,
}

impl RequestIdentity {
    /// Merge decoded claims with the freshly fetched user record
    fn merge(claims: Claims, user: &User) -> Self {
        Self {
            user_id: user.id,
            email: claims.email,
            role: user.role,
            reg_number: user.reg_number.clone(),
            primary_country: user.primary_country.clone(),
            account_created_at: claims.created_at,
        }
    }
}

/// Object-safe resolver interface for the HTTP middleware
///
/// Lets the presentation layer hold the gate as `Arc<dyn IdentityResolver>`
/// without knowing the concrete repository type.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Verify a raw bearer token and resolve the request identity
    async fn resolve(&self, token: &str) -> DomainResult<RequestIdentity>;
}

/// Bearer-token gate guarding protected endpoints
pub struct AuthGate<U: UserRepository> {
    token_service: Arc<TokenService>,
    user_repository: Arc<U>,
}

impl<U: UserRepository> AuthGate<U> {
    /// Creates a new gate over a token service and a user repository
    pub fn new(token_service: Arc<TokenService>, user_repository: Arc<U>) -> Self {
        Self {
            token_service,
            user_repository,
        }
    }

    /// Verify a token and resolve the identity it authenticates
    ///
    /// # Returns
    ///
    /// * `Ok(RequestIdentity)` - Token valid, user resolved from storage
    /// * `Err(TokenError::TokenExpired)` - Past the embedded expiry
    /// * `Err(TokenError::InvalidSignature | InvalidTokenFormat)` - Bad token
    /// * `Err(AuthError::UserNotFound)` - Token valid but user no longer exists
    pub async fn verify(&self, token: &str) -> DomainResult<RequestIdentity> {
        let claims = self.token_service.decode(token)?;

        let user = self
            .user_repository
            .find_by_id(claims.user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        tracing::debug!(user_id = user.id, "request identity resolved");
        Ok(RequestIdentity::merge(claims, &user))
    }
}

#[async_trait]
impl<U: UserRepository> IdentityResolver for AuthGate<U> {
    async fn resolve(&self, token: &str) -> DomainResult<RequestIdentity> {
        self.verify(token).await
    }
}
