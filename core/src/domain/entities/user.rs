//! User entity representing a registered account in the TradeGuard system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Role a user holds within the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// An exporter submitting consignments
    Exporter,
    /// A compliance officer reviewing consignments
    Compliance,
    /// A platform administrator
    Admin,
}

impl UserRole {
    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Exporter => "exporter",
            UserRole::Compliance => "compliance",
            UserRole::Admin => "admin",
        }
    }

    /// Parse a role from its wire representation
    ///
    /// Values outside the closed set are rejected; the role enum is a fixed
    /// invariant of the data model.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "exporter" => Ok(UserRole::Exporter),
            "compliance" => Ok(UserRole::Compliance),
            "admin" => Ok(UserRole::Admin),
            other => Err(DomainError::InvalidEnum {
                field: "userRole".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Kind of company a user registered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    Sme,
    Logistics,
    Freight,
    Customs,
}

impl CompanyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyType::Sme => "sme",
            CompanyType::Logistics => "logistics",
            CompanyType::Freight => "freight",
            CompanyType::Customs => "customs",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "sme" => Ok(CompanyType::Sme),
            "logistics" => Ok(CompanyType::Logistics),
            "freight" => Ok(CompanyType::Freight),
            "customs" => Ok(CompanyType::Customs),
            other => Err(DomainError::InvalidEnum {
                field: "companyType".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Declared shipping volume category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingVolume {
    Low,
    Medium,
    High,
}

impl ShippingVolume {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingVolume::Low => "low",
            ShippingVolume::Medium => "medium",
            ShippingVolume::High => "high",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "low" => Ok(ShippingVolume::Low),
            "medium" => Ok(ShippingVolume::Medium),
            "high" => Ok(ShippingVolume::High),
            other => Err(DomainError::InvalidEnum {
                field: "shippingVolume".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// User entity as stored in the credential store
///
/// The password digest never leaves the backend; response DTOs project the
/// entity without it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// Unique email address used for login
    pub email: String,

    /// Salted bcrypt digest of the password
    pub password_hash: String,

    pub first_name: String,

    pub last_name: String,

    pub phone_number: String,

    pub company_name: String,

    /// Kind of company, if declared at registration
    pub company_type: Option<CompanyType>,

    /// Company registration number, if declared
    pub reg_number: Option<String>,

    /// Primary country of operation
    pub primary_country: String,

    /// Declared shipping volume category, if any
    pub shipping_volume: Option<ShippingVolume>,

    /// Role within the platform
    pub role: UserRole,

    /// Whether two-factor authentication is enabled
    pub two_fa: bool,

    /// Whether general notifications are enabled
    pub notifs: bool,

    /// Whether compliance alerts are enabled
    pub alerts: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new user account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub company_name: String,
    pub company_type: Option<CompanyType>,
    pub reg_number: Option<String>,
    pub primary_country: String,
    pub shipping_volume: Option<ShippingVolume>,
    pub role: UserRole,
}

/// Partial profile update
///
/// `None` fields keep their stored value (COALESCE semantics at the store).
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub company_name: Option<String>,
    pub company_type: Option<CompanyType>,
    pub reg_number: Option<String>,
    pub primary_country: Option<String>,
    pub shipping_volume: Option<ShippingVolume>,
    pub two_fa: Option<bool>,
    pub notifs: Option<bool>,
    pub alerts: Option<bool>,
    pub password_hash: Option<String>,
}
