//! Domain entities

pub mod consignment;
pub mod token;
pub mod user;

pub use consignment::{ComplianceStatus, Consignment, NewConsignment, StoredInvoice};
pub use token::Claims;
pub use user::{CompanyType, NewUser, ProfileChanges, ShippingVolume, User, UserRole};
