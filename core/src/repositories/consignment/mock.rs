//! Mock implementation of ConsignmentRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::consignment::{
    ComplianceStatus, Consignment, NewConsignment, StoredInvoice,
};
use crate::errors::{DomainError, DomainResult};

use super::repository::ConsignmentRepository;

/// In-memory consignment repository
///
/// Enforces shipment-identifier uniqueness like the MySQL schema, and keeps
/// invoice bytes in a separate map to mirror the projection split of the
/// real implementation.
pub struct MockConsignmentRepository {
    consignments: Arc<RwLock<HashMap<i64, Consignment>>>,
    invoices: Arc<RwLock<HashMap<i64, Option<Vec<u8>>>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockConsignmentRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            consignments: Arc::new(RwLock::new(HashMap::new())),
            invoices: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for MockConsignmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConsignmentRepository for MockConsignmentRepository {
    async fn insert(&self, consignment: NewConsignment) -> DomainResult<i64> {
        let mut consignments = self.consignments.write().await;

        if consignments
            .values()
            .any(|c| c.shipment_id == consignment.shipment_id)
        {
            return Err(DomainError::DuplicateKey {
                field: "shipment_id".to_string(),
            });
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        self.invoices.write().await.insert(id, consignment.invoice);
        consignments.insert(
            id,
            Consignment {
                id,
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
                compliant: ComplianceStatus::Pending,
                created_at: chrono::Utc::now(),
            },
        );

        Ok(id)
    }

    async fn fetch_all(&self) -> DomainResult<Vec<Consignment>> {
        let consignments = self.consignments.read().await;
        let mut all: Vec<Consignment> = consignments.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(all)
    }

    async fn fetch_one(&self, id: i64) -> DomainResult<Option<Consignment>> {
        let consignments = self.consignments.read().await;
        Ok(consignments.get(&id).cloned())
    }

    async fn fetch_invoice(&self, id: i64) -> DomainResult<Option<StoredInvoice>> {
        let consignments = self.consignments.read().await;
        let shipment_id = match consignments.get(&id) {
            Some(consignment) => consignment.shipment_id.clone(),
            None => return Ok(None),
        };

        let invoices = self.invoices.read().await;
        Ok(Some(StoredInvoice {
            shipment_id,
            content: invoices.get(&id).cloned().flatten(),
        }))
    }

    async fn update_compliance(&self, id: i64, status: ComplianceStatus) -> DomainResult<bool> {
        let mut consignments = self.consignments.write().await;
        match consignments.get_mut(&id) {
            Some(consignment) => {
                consignment.compliant = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
