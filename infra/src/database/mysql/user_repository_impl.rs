//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use tg_core::domain::entities::user::{
    CompanyType, NewUser, ProfileChanges, ShippingVolume, User, UserRole,
};
use tg_core::errors::{DomainError, DomainResult};
use tg_core::repositories::UserRepository;

use super::{map_insert_error, map_query_error};

const USER_COLUMNS: &str = r#"user_id, email, password, firstName, lastName, phoneNumber,
       companyName, companyType, regNumber, primaryCountry, shippingVolume,
       userRole, twoFA, notifs, alerts, created_at"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> DomainResult<User> {
        let role: String = row.try_get("userRole").map_err(map_query_error)?;
        let role = UserRole::parse(&role).map_err(|e| DomainError::Database {
            message: format!("Invalid userRole column: {}", e),
        })?;

        let company_type: Option<String> = row.try_get("companyType").map_err(map_query_error)?;
        let company_type = company_type
            .as_deref()
            .map(CompanyType::parse)
            .transpose()
            .map_err(|e| DomainError::Database {
                message: format!("Invalid companyType column: {}", e),
            })?;

        let shipping_volume: Option<String> =
            row.try_get("shippingVolume").map_err(map_query_error)?;
        let shipping_volume = shipping_volume
            .as_deref()
            .map(ShippingVolume::parse)
            .transpose()
            .map_err(|e| DomainError::Database {
                message: format!("Invalid shippingVolume column: {}", e),
            })?;

        Ok(User {
            id: row.try_get("user_id").map_err(map_query_error)?,
            email: row.try_get("email").map_err(map_query_error)?,
            password_hash: row.try_get("password").map_err(map_query_error)?,
            first_name: row.try_get("firstName").map_err(map_query_error)?,
            last_name: row.try_get("lastName").map_err(map_query_error)?,
            phone_number: row.try_get("phoneNumber").map_err(map_query_error)?,
            company_name: row.try_get("companyName").map_err(map_query_error)?,
            company_type,
            reg_number: row.try_get("regNumber").map_err(map_query_error)?,
            primary_country: row.try_get("primaryCountry").map_err(map_query_error)?,
            shipping_volume,
            role,
            two_fa: row.try_get("twoFA").map_err(map_query_error)?,
            notifs: row.try_get("notifs").map_err(map_query_error)?,
            alerts: row.try_get("alerts").map_err(map_query_error)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(map_query_error)?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let query = format!(
            "SELECT {USER_COLUMNS}
             FROM users
             WHERE email = ?
             LIMIT 1"
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let query = format!(
            "SELECT {USER_COLUMNS}
             FROM users
             WHERE user_id = ?
             LIMIT 1"
        );

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: NewUser) -> DomainResult<i64> {
        let query = r#"
            INSERT INTO users (
                email, password, firstName, lastName, phoneNumber,
                companyName, companyType, regNumber, primaryCountry,
                shippingVolume, userRole
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.phone_number)
            .bind(&user.company_name)
            .bind(user.company_type.map(|c| c.as_str()))
            .bind(&user.reg_number)
            .bind(&user.primary_country)
            .bind(user.shipping_volume.map(|v| v.as_str()))
            .bind(user.role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, "email"))?;

        Ok(result.last_insert_id() as i64)
    }

    async fn update_profile(&self, id: i64, changes: &ProfileChanges) -> DomainResult<()> {
        // COALESCE keeps the stored value for every field left as None.
        let query = r#"
            UPDATE users SET
                firstName = COALESCE(?, firstName),
                lastName = COALESCE(?, lastName),
                phoneNumber = COALESCE(?, phoneNumber),
                companyName = COALESCE(?, companyName),
                companyType = COALESCE(?, companyType),
                regNumber = COALESCE(?, regNumber),
                primaryCountry = COALESCE(?, primaryCountry),
                shippingVolume = COALESCE(?, shippingVolume),
                twoFA = COALESCE(?, twoFA),
                notifs = COALESCE(?, notifs),
                alerts = COALESCE(?, alerts),
                password = COALESCE(?, password)
            WHERE user_id = ?
        "#;

        sqlx::query(query)
            .bind(&changes.first_name)
            .bind(&changes.last_name)
            .bind(&changes.phone_number)
            .bind(&changes.company_name)
            .bind(changes.company_type.map(|c| c.as_str()))
            .bind(&changes.reg_number)
            .bind(&changes.primary_country)
            .bind(changes.shipping_volume.map(|v| v.as_str()))
            .bind(changes.two_fa)
            .bind(changes.notifs)
            .bind(changes.alerts)
            .bind(&changes.password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_query_error)?;

        Ok(())
    }
}
