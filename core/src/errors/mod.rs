//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// One or more field-level validation failures, all surfaced together
    #[error("Validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    /// Value outside a closed enum set
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },

    /// Write rejected by a store uniqueness constraint
    #[error("Duplicate value for {field}")]
    DuplicateKey { field: String },

    /// Requested resource does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Underlying store failure, surfaced with its raw message
    #[error("Database error: {message}")]
    Database { message: String },

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_failure() {
        let error = DomainError::Validation {
            errors: vec![
                "PackageQuantity has invalid type, expected int".to_string(),
                "totalWeight is required".to_string(),
            ],
        };
        let message = error.to_string();

        assert!(message.contains("PackageQuantity"));
        assert!(message.contains("totalWeight"));
    }

    #[test]
    fn test_token_error_bridges_into_domain_error() {
        let error: DomainError = TokenError::TokenExpired.into();
        assert_eq!(error, DomainError::Token(TokenError::TokenExpired));
        assert_eq!(error.to_string(), "Token has expired");
    }

    #[test]
    fn test_auth_error_bridges_into_domain_error() {
        let error: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(error.to_string(), "Invalid credentials");
    }
}
