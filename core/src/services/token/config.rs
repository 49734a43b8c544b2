//! Token service configuration

use tg_shared::config::JwtConfig;

use crate::domain::entities::token::TOKEN_EXPIRY_MINUTES;

/// Configuration for the token service
///
/// Fixed at process start and never mutated afterwards; the service holds
/// the prepared keys derived from it.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret used for HS256 signing and verification
    pub secret: String,

    /// Token lifetime in minutes
    pub expiry_minutes: i64,
}

impl TokenConfig {
    /// Create a configuration with the default 90-minute lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_minutes: TOKEN_EXPIRY_MINUTES,
        }
    }

    /// Override the token lifetime
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.expiry_minutes = minutes;
        self
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expiry_minutes: config.token_expiry_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiry_is_ninety_minutes() {
        let config = TokenConfig::new("secret");
        assert_eq!(config.expiry_minutes, 90);
    }

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig::new("wire-secret");
        let config = TokenConfig::from(&jwt);
        assert_eq!(config.secret, "wire-secret");
        assert_eq!(config.expiry_minutes, 90);
    }
}
