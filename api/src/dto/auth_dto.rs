//! Authentication and profile DTOs
//!
//! Profile fields keep the camelCase wire names the web frontend expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use tg_core::domain::value_objects::AuthResponse;
use tg_core::services::auth::{ProfileUpdate, RegisterUser};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthenticateRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Registration payload
///
/// Required fields are checked for presence as a group, matching the
/// frontend's "Missing required fields" contract; everything else is
/// optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "companyName")]
    pub company_name: Option<String>,
    #[serde(rename = "userRole")]
    pub user_role: Option<String>,
    #[serde(rename = "companyType")]
    pub company_type: Option<String>,
    #[serde(rename = "regNumber")]
    pub reg_number: Option<String>,
    #[serde(rename = "primaryCountry")]
    pub primary_country: Option<String>,
    #[serde(rename = "shippingVolume")]
    pub shipping_volume: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Convert into the service payload, or `None` if a required field is
    /// absent or empty
    pub fn into_register_user(self) -> Option<RegisterUser> {
        let required = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Some(RegisterUser {
            first_name: required(self.first_name)?,
            last_name: required(self.last_name)?,
            email: required(self.email)?,
            phone_number: required(self.phone_number)?,
            company_name: required(self.company_name)?,
            role: required(self.user_role)?,
            company_type: self.company_type.filter(|v| !v.trim().is_empty()),
            reg_number: self.reg_number.filter(|v| !v.trim().is_empty()),
            primary_country: required(self.primary_country)?,
            shipping_volume: self.shipping_volume.filter(|v| !v.trim().is_empty()),
            password: required(self.password)?,
        })
    }
}

/// Profile edit payload; `user_id` names the target account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditProfileRequest {
    pub user_id: i64,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "companyName")]
    pub company_name: Option<String>,
    #[serde(rename = "companyType")]
    pub company_type: Option<String>,
    #[serde(rename = "regNumber")]
    pub reg_number: Option<String>,
    #[serde(rename = "primaryCountry")]
    pub primary_country: Option<String>,
    #[serde(rename = "shippingVolume")]
    pub shipping_volume: Option<String>,
    #[serde(rename = "twoFA")]
    pub two_fa: Option<bool>,
    pub notifs: Option<bool>,
    pub alerts: Option<bool>,
    pub new_password: Option<String>,
    pub current_password: Option<String>,
}

impl EditProfileRequest {
    pub fn into_profile_update(self) -> ProfileUpdate {
        ProfileUpdate {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            company_name: self.company_name,
            company_type: self.company_type,
            reg_number: self.reg_number,
            primary_country: self.primary_country,
            shipping_volume: self.shipping_volume,
            two_fa: self.two_fa,
            notifs: self.notifs,
            alerts: self.alerts,
            new_password: self.new_password,
            current_password: self.current_password,
        }
    }
}

/// Successful authentication response: token plus profile projection
///
/// The password digest is not part of this projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user_id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "userRole")]
    pub user_role: String,
    #[serde(rename = "regNumber")]
    pub reg_number: Option<String>,
    #[serde(rename = "primaryCountry")]
    pub primary_country: String,
    #[serde(rename = "shippingVolume")]
    pub shipping_volume: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<AuthResponse> for AuthenticateResponse {
    fn from(auth: AuthResponse) -> Self {
        let user = auth.user;
        Self {
            success: true,
            message: "Authentication successful".to_string(),
            token: auth.token,
            user_id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone_number: user.phone_number,
            company_name: user.company_name,
            user_role: user.role.as_str().to_string(),
            reg_number: user.reg_number,
            primary_country: user.primary_country,
            shipping_volume: user.shipping_volume.map(|v| v.as_str().to_string()),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i64,
}
