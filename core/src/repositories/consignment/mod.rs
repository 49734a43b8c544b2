//! Consignment repository interface and mock implementation

mod mock;
mod repository;

pub use mock::MockConsignmentRepository;
pub use repository::ConsignmentRepository;
