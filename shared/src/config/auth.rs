//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
///
/// The secret is process-wide and read exactly once at startup; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in minutes
    pub token_expiry_minutes: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Load from JWT_SECRET / TOKEN_EXPIRY_MINUTES environment variables
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let token_expiry_minutes = env::var("TOKEN_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "90".to_string())
            .parse()
            .unwrap_or(90);

        Self {
            secret,
            token_expiry_minutes,
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            token_expiry_minutes: 90,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_expiry_minutes, 90);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_with_secret() {
        let config = JwtConfig::new("my-secret");
        assert!(!config.is_using_default_secret());
        assert_eq!(config.token_expiry_minutes, 90);
    }
}
