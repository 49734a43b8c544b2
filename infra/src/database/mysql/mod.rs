//! MySQL repository implementations

mod consignment_repository_impl;
mod user_repository_impl;

pub use consignment_repository_impl::MySqlConsignmentRepository;
pub use user_repository_impl::MySqlUserRepository;

use tg_core::errors::DomainError;

/// Map an SQLx error to the domain taxonomy
///
/// A violated UNIQUE constraint becomes `DuplicateKey` for the given field;
/// the store itself is the arbiter under concurrent duplicate inserts.
/// Everything else surfaces as a store failure with the raw message.
pub(crate) fn map_insert_error(error: sqlx::Error, field: &str) -> DomainError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::DuplicateKey {
            field: field.to_string(),
        },
        _ => DomainError::Database {
            message: error.to_string(),
        },
    }
}

/// Map a non-insert SQLx error to a store failure
pub(crate) fn map_query_error(error: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: error.to_string(),
    }
}
