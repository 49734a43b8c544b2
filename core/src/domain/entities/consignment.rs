//! Consignment entity: a shipment record tracked for customs compliance.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Compliance lifecycle flag on a consignment
///
/// Every record starts as `Pending` and is moved to `Compliant` or
/// `Flagged` by a compliance review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Pending,
    Compliant,
    Flagged,
}

impl ComplianceStatus {
    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Pending => "pending",
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Flagged => "flagged",
        }
    }

    /// Parse a status from its wire representation
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "pending" => Ok(ComplianceStatus::Pending),
            "compliant" => Ok(ComplianceStatus::Compliant),
            "flagged" => Ok(ComplianceStatus::Flagged),
            other => Err(DomainError::InvalidEnum {
                field: "compliant".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl Default for ComplianceStatus {
    fn default() -> Self {
        ComplianceStatus::Pending
    }
}

/// Consignment record as stored
///
/// The attached invoice document is deliberately not part of this
/// projection; it is fetched separately for download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consignment {
    /// Unique identifier, assigned by the store
    pub id: i64,

    pub sender_name: String,
    pub sender_address: String,
    pub sender_country: String,
    pub sender_mail: String,
    pub sender_phone: String,

    pub receiver_name: String,
    pub receiver_address: String,
    pub receiver_country: String,

    /// Business-assigned shipment identifier, unique across all records
    pub shipment_id: String,

    /// Date the shipment leaves the sender
    pub shipment_date: NaiveDate,

    /// Number of packages in the consignment
    pub package_quantity: i64,

    /// Harmonized System tariff code
    pub hs_code: String,

    /// Total weight in kilograms
    pub total_weight: f64,

    pub item_desc: String,

    /// Special handling instructions, empty when none were given
    pub handling_inst: String,

    /// Compliance review state
    pub compliant: ComplianceStatus,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new consignment
///
/// Carries no compliance status on purpose: new records always enter the
/// store as `pending` regardless of caller input.
#[derive(Debug, Clone)]
pub struct NewConsignment {
    pub sender_name: String,
    pub sender_address: String,
    pub sender_country: String,
    pub sender_mail: String,
    pub sender_phone: String,
    pub receiver_name: String,
    pub receiver_address: String,
    pub receiver_country: String,
    pub shipment_id: String,
    pub shipment_date: NaiveDate,
    pub package_quantity: i64,
    pub hs_code: String,
    pub total_weight: f64,
    pub item_desc: String,
    pub handling_inst: String,
    /// Attached commercial invoice document, if uploaded
    pub invoice: Option<Vec<u8>>,
}

/// Invoice column projection used by the download endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredInvoice {
    /// Business shipment identifier, used to name the downloaded file
    pub shipment_id: String,
    /// Raw document bytes; `None` when no invoice was uploaded
    pub content: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            ComplianceStatus::Pending,
            ComplianceStatus::Compliant,
            ComplianceStatus::Flagged,
        ] {
            assert_eq!(ComplianceStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_status_outside_closed_set_is_rejected() {
        let err = ComplianceStatus::parse("urgent").unwrap_err();
        match err {
            DomainError::InvalidEnum { field, value } => {
                assert_eq!(field, "compliant");
                assert_eq!(value, "urgent");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(ComplianceStatus::default(), ComplianceStatus::Pending);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ComplianceStatus::Flagged).unwrap();
        assert_eq!(json, "\"flagged\"");
    }
}
