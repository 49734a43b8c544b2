//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::user::{
    CompanyType, NewUser, ProfileChanges, ShippingVolume, UserRole,
};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Registration payload as received from the API layer
///
/// Enum-constrained fields arrive as raw strings and are validated against
/// their closed sets here, before anything is written.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub company_name: String,
    pub role: String,
    pub company_type: Option<String>,
    pub reg_number: Option<String>,
    pub primary_country: String,
    pub shipping_volume: Option<String>,
}

/// Profile edit payload
///
/// `user_id` is the target account; the caller may only edit their own
/// profile. A password change requires the current password alongside the
/// new one.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub company_name: Option<String>,
    pub company_type: Option<String>,
    pub reg_number: Option<String>,
    pub primary_country: Option<String>,
    pub shipping_volume: Option<String>,
    pub two_fa: Option<bool>,
    pub notifs: Option<bool>,
    pub alerts: Option<bool>,
    pub new_password: Option<String>,
    pub current_password: Option<String>,
}

/// Authentication service for registration, login and profile editing
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            password_hasher,
        }
    }

    /// Register a new user account
    ///
    /// Validates the enum-constrained fields, hashes the password and
    /// inserts the record. Email uniqueness is left to the store: a
    /// concurrent duplicate registration loses with `DuplicateKey`.
    ///
    /// # Returns
    ///
    /// * `Ok(id)` - Identifier of the created user
    /// * `Err(DomainError::InvalidEnum)` - Role, company type or shipping
    ///   volume outside its closed set
    /// * `Err(DomainError::DuplicateKey)` - Email already registered
    pub async fn register(&self, request: RegisterUser) -> DomainResult<i64> {
        let role = UserRole::parse(&request.role)?;
        let company_type = request
            .company_type
            .as_deref()
            .map(CompanyType::parse)
            .transpose()?;
        let shipping_volume = request
            .shipping_volume
            .as_deref()
            .map(ShippingVolume::parse)
            .transpose()?;

        let password_hash = self.password_hasher.hash(&request.password)?;

        let id = self
            .user_repository
            .create(NewUser {
                email: request.email,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
                phone_number: request.phone_number,
                company_name: request.company_name,
                company_type,
                reg_number: request.reg_number,
                primary_country: request.primary_country,
                shipping_volume,
                role,
            })
            .await?;

        tracing::info!(user_id = id, "user registered");
        Ok(id)
    }

    /// Authenticate with email and password
    ///
    /// An unknown email and a failed digest check are indistinguishable to
    /// the caller: both yield `InvalidCredentials`.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let token = self.token_service.issue(&user)?;

        tracing::info!(user_id = user.id, "user authenticated");
        Ok(AuthResponse { token, user })
    }

    /// Apply a partial profile update for the authenticated user
    ///
    /// # Arguments
    ///
    /// * `auth_user_id` - Identity resolved by the gate
    /// * `request` - Requested changes, targeting `request.user_id`
    ///
    /// # Returns
    ///
    /// * `Err(AuthError::ProfileOwnership)` - Target is another account
    /// * `Err(AuthError::InvalidCredentials)` - Password change with a wrong
    ///   current password
    pub async fn edit_profile(
        &self,
        auth_user_id: i64,
        request: ProfileUpdate,
    ) -> DomainResult<()> {
        if auth_user_id != request.user_id {
            return Err(DomainError::Auth(AuthError::ProfileOwnership));
        }

        let company_type = request
            .company_type
            .as_deref()
            .map(CompanyType::parse)
            .transpose()?;
        let shipping_volume = request
            .shipping_volume
            .as_deref()
            .map(ShippingVolume::parse)
            .transpose()?;

        let password_hash = match (&request.new_password, &request.current_password) {
            (Some(new_password), Some(current_password)) => {
                let user = self
                    .user_repository
                    .find_by_id(auth_user_id)
                    .await?
                    .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

                if !self
                    .password_hasher
                    .verify(current_password, &user.password_hash)
                {
                    return Err(DomainError::Auth(AuthError::InvalidCredentials));
                }

                Some(self.password_hasher.hash(new_password)?)
            }
            _ => None,
        };

        let changes = ProfileChanges {
            first_name: request.first_name,
            last_name: request.last_name,
            phone_number: request.phone_number,
            company_name: request.company_name,
            company_type,
            reg_number: request.reg_number,
            primary_country: request.primary_country,
            shipping_volume,
            two_fa: request.two_fa,
            notifs: request.notifs,
            alerts: request.alerts,
            password_hash,
        };

        self.user_repository
            .update_profile(auth_user_id, &changes)
            .await?;

        tracing::info!(user_id = auth_user_id, "profile updated");
        Ok(())
    }
}
