//! Mock implementation of UserRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, ProfileChanges, User, UserRole};
use crate::errors::{DomainError, DomainResult};

use super::repository::UserRepository;

/// In-memory user repository
///
/// Enforces the same email uniqueness the MySQL schema does, so tests
/// exercise the `DuplicateKey` path against realistic behavior.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Change a user's role in place, bypassing the service layer
    ///
    /// Test hook for the gate's re-fetch invariant: a role change in
    /// storage must be visible to already-issued tokens.
    pub async fn set_role(&self, id: i64, role: UserRole) {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(&id) {
            user.role = role;
        }
    }

    /// Remove a user directly, bypassing the service layer
    pub async fn remove(&self, id: i64) {
        self.users.write().await.remove(&id);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> DomainResult<i64> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::DuplicateKey {
                field: "email".to_string(),
            });
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        users.insert(
            id,
            User {
                id,
                email: user.email,
                password_hash: user.password_hash,
                first_name: user.first_name,
                last_name: user.last_name,
                phone_number: user.phone_number,
                company_name: user.company_name,
                company_type: user.company_type,
                reg_number: user.reg_number,
                primary_country: user.primary_country,
                shipping_volume: user.shipping_volume,
                role: user.role,
                two_fa: false,
                notifs: true,
                alerts: true,
                created_at: chrono::Utc::now(),
            },
        );

        Ok(id)
    }

    async fn update_profile(&self, id: i64, changes: &ProfileChanges) -> DomainResult<()> {
        let mut users = self.users.write().await;

        let user = users.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "User".to_string(),
        })?;

        if let Some(value) = &changes.first_name {
            user.first_name = value.clone();
        }
        if let Some(value) = &changes.last_name {
            user.last_name = value.clone();
        }
        if let Some(value) = &changes.phone_number {
            user.phone_number = value.clone();
        }
        if let Some(value) = &changes.company_name {
            user.company_name = value.clone();
        }
        if let Some(value) = changes.company_type {
            user.company_type = Some(value);
        }
        if let Some(value) = &changes.reg_number {
            user.reg_number = Some(value.clone());
        }
        if let Some(value) = &changes.primary_country {
            user.primary_country = value.clone();
        }
        if let Some(value) = changes.shipping_volume {
            user.shipping_volume = Some(value);
        }
        if let Some(value) = changes.two_fa {
            user.two_fa = value;
        }
        if let Some(value) = changes.notifs {
            user.notifs = value;
        }
        if let Some(value) = changes.alerts {
            user.alerts = value;
        }
        if let Some(value) = &changes.password_hash {
            user.password_hash = value.clone();
        }

        Ok(())
    }
}
