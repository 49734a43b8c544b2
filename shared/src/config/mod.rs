//! Application configuration
//!
//! Every section is loaded from environment variables with sensible
//! development defaults. Configuration is read once at startup and treated
//! as immutable for the lifetime of the process.

mod auth;
mod database;
mod environment;
mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Runtime environment (development/staging/production)
    pub environment: Environment,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Database connection settings
    pub database: DatabaseConfig,

    /// JWT signing settings
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}
