//! Consignment DTOs
//!
//! List and detail projections use the snake_case wire names the frontend
//! consumes; the invoice document is never part of them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use tg_core::domain::entities::consignment::Consignment;

/// Consignment projection for list and detail responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsignmentResponse {
    pub uuid: i64,
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
    pub compliant: String,
    pub created_at: DateTime<Utc>,
}

impl From<Consignment> for ConsignmentResponse {
    fn from(consignment: Consignment) -> Self {
        Self {
            uuid: consignment.id,
            sender_name: consignment.sender_name,
            sender_address: consignment.sender_address,
            sender_country: consignment.sender_country,
            sender_mail: consignment.sender_mail,
            sender_phone: consignment.sender_phone,
            receiver_name: consignment.receiver_name,
            receiver_address: consignment.receiver_address,
            receiver_country: consignment.receiver_country,
            shipment_id: consignment.shipment_id,
            shipment_date: consignment.shipment_date,
            package_quantity: consignment.package_quantity,
            hs_code: consignment.hs_code,
            total_weight: consignment.total_weight,
            item_desc: consignment.item_desc,
            handling_inst: consignment.handling_inst,
            compliant: consignment.compliant.as_str().to_string(),
            created_at: consignment.created_at,
        }
    }
}

/// Response for a successful consignment creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddConsignmentResponse {
    pub success: bool,
    pub message: String,
    /// Store-assigned record identifier (legacy field name)
    pub uuid: i64,
}

/// Compliance status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateComplianceRequest {
    pub compliant: String,
}
