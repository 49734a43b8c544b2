//! Consignment service: create, review and fetch shipment records

use std::sync::Arc;

use crate::domain::entities::consignment::{
    ComplianceStatus, Consignment, NewConsignment, StoredInvoice,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ConsignmentRepository;

/// Invoice document prepared for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDownload {
    /// Suggested filename, derived from the business shipment identifier
    pub filename: String,
    /// Raw document bytes
    pub content: Vec<u8>,
}

/// Service managing the consignment record lifecycle
pub struct ConsignmentService<C: ConsignmentRepository> {
    repository: Arc<C>,
}

impl<C: ConsignmentRepository> ConsignmentService<C> {
    /// Create a new consignment service
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Create a new consignment record
    ///
    /// The record always enters the store with compliance status `pending`;
    /// the insert payload cannot carry a status at all. A duplicate
    /// business shipment identifier is rejected with `DuplicateKey` by the
    /// store's uniqueness constraint.
    pub async fn create(&self, consignment: NewConsignment) -> DomainResult<i64> {
        let id = self.repository.insert(consignment).await?;
        tracing::info!(consignment_id = id, "consignment created");
        Ok(id)
    }

    /// Update the compliance status of a record
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::InvalidEnum)` - Status outside
    ///   {pending, compliant, flagged}
    /// * `Err(DomainError::NotFound)` - No record with that identifier
    pub async fn update_compliance(&self, id: i64, status: &str) -> DomainResult<()> {
        let status = ComplianceStatus::parse(status)?;

        let updated = self.repository.update_compliance(id, status).await?;
        if !updated {
            return Err(DomainError::NotFound {
                resource: "Consignment".to_string(),
            });
        }

        tracing::info!(consignment_id = id, status = status.as_str(), "compliance updated");
        Ok(())
    }

    /// Fetch all consignments, newest first
    ///
    /// An empty result set is reported as `NotFound` rather than an empty
    /// list; callers depend on this wire behavior.
    pub async fn fetch_all(&self) -> DomainResult<Vec<Consignment>> {
        let consignments = self.repository.fetch_all().await?;

        if consignments.is_empty() {
            return Err(DomainError::NotFound {
                resource: "Consignments".to_string(),
            });
        }

        Ok(consignments)
    }

    /// Fetch a single consignment by identifier
    pub async fn fetch_one(&self, id: i64) -> DomainResult<Consignment> {
        self.repository
            .fetch_one(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Consignment".to_string(),
            })
    }

    /// Fetch the attached invoice document for download
    ///
    /// A missing record and a record without an uploaded document are the
    /// same failure from the caller's point of view.
    pub async fn download_invoice(&self, id: i64) -> DomainResult<InvoiceDownload> {
        match self.repository.fetch_invoice(id).await? {
            Some(StoredInvoice {
                shipment_id,
                content: Some(content),
            }) => Ok(InvoiceDownload {
                filename: format!("invoice_{}.pdf", shipment_id),
                content,
            }),
            _ => Err(DomainError::NotFound {
                resource: "Invoice".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockConsignmentRepository;
    use chrono::NaiveDate;

    fn new_consignment(shipment_id: &str, invoice: Option<Vec<u8>>) -> NewConsignment {
        NewConsignment {
            sender_name: "Okafor Exports".to_string(),
            sender_address: "14 Marina Road, Lagos".to_string(),
            sender_country: "Nigeria".to_string(),
            sender_mail: "ops@okafor.example".to_string(),
            sender_phone: "+2348012345678".to_string(),
            receiver_name: "Brandt GmbH".to_string(),
            receiver_address: "Hafenstrasse 2, Hamburg".to_string(),
            receiver_country: "Germany".to_string(),
            shipment_id: shipment_id.to_string(),
            shipment_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            package_quantity: 12,
            hs_code: "8471.30".to_string(),
            total_weight: 103.5,
            item_desc: "Machined parts".to_string(),
            handling_inst: String::new(),
            invoice,
        }
    }

    fn service() -> ConsignmentService<MockConsignmentRepository> {
        ConsignmentService::new(Arc::new(MockConsignmentRepository::new()))
    }

    #[tokio::test]
    async fn test_created_record_starts_pending() {
        let service = service();

        let id = service
            .create(new_consignment("SHP-2025-0001", None))
            .await
            .unwrap();
        let fetched = service.fetch_one(id).await.unwrap();

        assert_eq!(fetched.compliant, ComplianceStatus::Pending);
        assert_eq!(fetched.shipment_id, "SHP-2025-0001");
    }

    #[tokio::test]
    async fn test_duplicate_shipment_id_is_rejected() {
        let service = service();
        service
            .create(new_consignment("SHP-2025-0001", None))
            .await
            .unwrap();

        let err = service
            .create(new_consignment("SHP-2025-0001", None))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateKey {
                field: "shipment_id".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_update_compliance_rejects_value_outside_enum() {
        let service = service();
        let id = service
            .create(new_consignment("SHP-2025-0001", None))
            .await
            .unwrap();

        let err = service.update_compliance(id, "urgent").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidEnum { .. }));
    }

    #[tokio::test]
    async fn test_update_compliance_unknown_id_is_not_found() {
        let err = service().update_compliance(99, "flagged").await.unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound {
                resource: "Consignment".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_update_compliance_is_visible_on_fetch() {
        let service = service();
        let id = service
            .create(new_consignment("SHP-2025-0001", None))
            .await
            .unwrap();

        service.update_compliance(id, "flagged").await.unwrap();

        let fetched = service.fetch_one(id).await.unwrap();
        assert_eq!(fetched.compliant, ComplianceStatus::Flagged);
    }

    #[tokio::test]
    async fn test_fetch_all_empty_store_is_not_found() {
        let err = service().fetch_all().await.unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound {
                resource: "Consignments".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_all_returns_every_record() {
        let service = service();
        service
            .create(new_consignment("SHP-2025-0001", None))
            .await
            .unwrap();
        service
            .create(new_consignment("SHP-2025-0002", None))
            .await
            .unwrap();

        let all = service.fetch_all().await.unwrap();
        assert_eq!(all.len(), 2);
        // Newest first.
        assert_eq!(all[0].shipment_id, "SHP-2025-0002");
    }

    #[tokio::test]
    async fn test_download_invoice_returns_named_document() {
        let service = service();
        let id = service
            .create(new_consignment("SHP-2025-0001", Some(vec![0x25, 0x50])))
            .await
            .unwrap();

        let invoice = service.download_invoice(id).await.unwrap();
        assert_eq!(invoice.filename, "invoice_SHP-2025-0001.pdf");
        assert_eq!(invoice.content, vec![0x25, 0x50]);
    }

    #[tokio::test]
    async fn test_download_invoice_without_document_is_not_found() {
        let service = service();
        let id = service
            .create(new_consignment("SHP-2025-0001", None))
            .await
            .unwrap();

        let err = service.download_invoice(id).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound {
                resource: "Invoice".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_download_invoice_unknown_record_is_not_found() {
        let err = service().download_invoice(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
