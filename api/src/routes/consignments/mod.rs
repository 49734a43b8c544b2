//! Consignment route handlers
//!
//! - `POST /add-consignment` - multipart submission with optional invoice
//! - `GET /fetch-consignments` - bearer-protected list, newest first
//! - `GET /fetch-consignment/{id}` - bearer-protected detail
//! - `GET /download-invoice/{id}` - bearer-protected document download
//! - `PUT /update-compliance/{id}` - bearer-protected status update

pub mod add;
pub mod download_invoice;
pub mod fetch_all;
pub mod fetch_one;
pub mod update_compliance;
