//! Consignment management service

mod form;
mod service;

pub use form::{consignment_rules, draft_from_fields};
pub use service::{ConsignmentService, InvoiceDownload};
