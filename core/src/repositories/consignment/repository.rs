//! Consignment repository trait defining the interface for shipment-store access.

use async_trait::async_trait;

use crate::domain::entities::consignment::{
    ComplianceStatus, Consignment, NewConsignment, StoredInvoice,
};
use crate::errors::DomainResult;

/// Repository trait for consignment persistence operations
///
/// Shipment-identifier uniqueness is enforced by the store's UNIQUE
/// constraint; under concurrent duplicate inserts the loser receives
/// `DomainError::DuplicateKey`.
#[async_trait]
pub trait ConsignmentRepository: Send + Sync {
    /// Insert a new consignment and return the store-assigned identifier
    ///
    /// The record is persisted with compliance status `pending` regardless
    /// of caller input.
    ///
    /// # Returns
    /// * `Ok(id)` - Identifier of the created record
    /// * `Err(DomainError::DuplicateKey)` - Shipment identifier already exists
    /// * `Err(DomainError)` - Store failure
    async fn insert(&self, consignment: NewConsignment) -> DomainResult<i64>;

    /// Fetch all consignments, newest first
    ///
    /// The invoice document is not part of this projection.
    async fn fetch_all(&self) -> DomainResult<Vec<Consignment>>;

    /// Fetch a single consignment by identifier
    async fn fetch_one(&self, id: i64) -> DomainResult<Option<Consignment>>;

    /// Fetch the invoice column for a consignment
    ///
    /// `Ok(None)` means the record itself does not exist; a record without
    /// an uploaded document yields `Some` with empty content.
    async fn fetch_invoice(&self, id: i64) -> DomainResult<Option<StoredInvoice>>;

    /// Update the compliance status of a consignment
    ///
    /// # Returns
    /// * `Ok(true)` - Record updated
    /// * `Ok(false)` - No record with that identifier
    async fn update_compliance(&self, id: i64, status: ComplianceStatus) -> DomainResult<bool>;
}
