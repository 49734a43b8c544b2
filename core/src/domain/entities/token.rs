//! Token claim set for stateless bearer authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Token expiration time (90 minutes)
pub const TOKEN_EXPIRY_MINUTES: i64 = 90;

/// Claims structure embedded in the signed token
///
/// Field names are the wire contract: `userRole`, `regNumber` and
/// `primaryCountry` are snapshots taken at issuance and are always
/// refreshed from the credential store when the token is verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub user_id: i64,

    /// Email address at issuance
    pub email: String,

    /// Role at issuance
    #[serde(rename = "userRole")]
    pub user_role: String,

    /// Company registration number at issuance
    #[serde(rename = "regNumber", default)]
    pub reg_number: Option<String>,

    /// Primary country at issuance
    #[serde(rename = "primaryCountry")]
    pub primary_country: String,

    /// Account creation timestamp, snapshotted at issuance
    pub created_at: DateTime<Utc>,

    /// Absolute expiry as a unix timestamp
    pub exp: i64,
}

impl Claims {
    /// Build the claim set for a user, expiring `ttl_minutes` from now
    pub fn new(user: &User, ttl_minutes: i64) -> Self {
        let expiry = Utc::now() + Duration::minutes(ttl_minutes);

        Self {
            user_id: user.id,
            email: user.email.clone(),
            user_role: user.role.as_str().to_string(),
            reg_number: user.reg_number.clone(),
            primary_country: user.primary_country.clone(),
            created_at: user.created_at,
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims have passed their expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserRole;

    fn sample_user() -> User {
        User {
            id: 7,
            email: "a@x.com".to_string(),
            password_hash: "$2b$04$unused".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Okafor".to_string(),
            phone_number: "+2348012345678".to_string(),
            company_name: "Okafor Exports".to_string(),
            company_type: None,
            reg_number: Some("RC-10023".to_string()),
            primary_country: "Nigeria".to_string(),
            shipping_volume: None,
            role: UserRole::Exporter,
            two_fa: false,
            notifs: true,
            alerts: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_claims_snapshot_user_fields() {
        let user = sample_user();
        let claims = Claims::new(&user, TOKEN_EXPIRY_MINUTES);

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.user_role, "exporter");
        assert_eq!(claims.reg_number.as_deref(), Some("RC-10023"));
        assert_eq!(claims.primary_country, "Nigeria");
        assert_eq!(claims.created_at, user.created_at);
    }

    #[test]
    fn test_expiry_is_issuance_plus_ttl() {
        let before = Utc::now().timestamp();
        let claims = Claims::new(&sample_user(), TOKEN_EXPIRY_MINUTES);
        let after = Utc::now().timestamp();

        assert!(claims.exp >= before + TOKEN_EXPIRY_MINUTES * 60);
        assert!(claims.exp <= after + TOKEN_EXPIRY_MINUTES * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let mut claims = Claims::new(&sample_user(), TOKEN_EXPIRY_MINUTES);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_wire_field_names() {
        let claims = Claims::new(&sample_user(), TOKEN_EXPIRY_MINUTES);
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.get("userRole").is_some());
        assert!(json.get("regNumber").is_some());
        assert!(json.get("primaryCountry").is_some());
        assert!(json.get("user_id").is_some());
        assert!(json.get("exp").is_some());
    }
}
