//! Infrastructure layer for the TradeGuard backend
//!
//! Provides the MySQL-backed implementations of the core repository traits
//! and the connection-pool management they share.

pub mod database;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Configuration problem (bad URL, missing variable)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
