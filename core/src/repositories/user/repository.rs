//! User repository trait defining the interface for credential-store access.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, ProfileChanges, User};
use crate::errors::DomainResult;

/// Repository trait for user persistence operations
///
/// Implementations own the mapping between the domain entity and the
/// underlying store. Email uniqueness is enforced by the store itself:
/// concurrent duplicate inserts must be resolved by its UNIQUE constraint,
/// with the loser receiving `DomainError::DuplicateKey`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered under that email
    /// * `Err(DomainError)` - Store failure
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find a user by unique identifier
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    /// Insert a new user and return the store-assigned identifier
    ///
    /// # Returns
    /// * `Ok(id)` - Identifier of the created user
    /// * `Err(DomainError::DuplicateKey)` - Email already registered
    /// * `Err(DomainError)` - Store failure
    async fn create(&self, user: NewUser) -> DomainResult<i64>;

    /// Apply a partial profile update
    ///
    /// Fields left as `None` keep their stored value.
    async fn update_profile(&self, id: i64, changes: &ProfileChanges) -> DomainResult<()>;
}
