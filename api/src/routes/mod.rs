//! Route handlers
//!
//! One module per resource, one file per endpoint. Handlers are generic
//! over the repository traits so the same code serves the MySQL
//! implementations in production and the in-memory mocks in tests.

pub mod auth;
pub mod consignments;

use std::sync::Arc;

use tg_core::repositories::{ConsignmentRepository, UserRepository};
use tg_core::services::auth::AuthService;
use tg_core::services::consignment::ConsignmentService;

/// Shared application state injected into handlers
pub struct AppState<U, C>
where
    U: UserRepository,
    C: ConsignmentRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub consignment_service: Arc<ConsignmentService<C>>,
}
