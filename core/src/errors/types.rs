//! Domain-specific error types for authentication and token handling
//!
//! These enums cover the failure modes of the authentication flow and the
//! bearer-token gate. HTTP status mapping happens in the presentation layer.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("You can only edit your own profile")]
    ProfileOwnership,
}

/// Token-related errors
///
/// Each variant corresponds to one short-circuit in the gate's
/// verification sequence: missing header, bad signature, past expiry,
/// malformed token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is missing")]
    MissingToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token is invalid")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
