//! Shared harness for API integration tests
//!
//! Wires the in-memory mock repositories into the production application
//! factory, so requests exercise the full middleware and handler stack.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use tg_api::routes::AppState;
use tg_core::repositories::{MockConsignmentRepository, MockUserRepository};
use tg_core::services::auth::{AuthGate, AuthService, IdentityResolver};
use tg_core::services::consignment::ConsignmentService;
use tg_core::services::password::PasswordHasher;
use tg_core::services::token::{TokenConfig, TokenService};

pub const TEST_SECRET: &str = "integration-secret";

pub struct TestContext {
    pub state: web::Data<AppState<MockUserRepository, MockConsignmentRepository>>,
    pub resolver: web::Data<Arc<dyn IdentityResolver>>,
    pub user_repository: Arc<MockUserRepository>,
}

/// Build the full service graph over mock repositories
pub fn test_context() -> TestContext {
    let user_repository = Arc::new(MockUserRepository::new());
    let consignment_repository = Arc::new(MockConsignmentRepository::new());

    let token_service = Arc::new(TokenService::new(TokenConfig::new(TEST_SECRET)));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        token_service.clone(),
        PasswordHasher::with_cost(4),
    ));
    let consignment_service = Arc::new(ConsignmentService::new(consignment_repository));
    let auth_gate: Arc<dyn IdentityResolver> =
        Arc::new(AuthGate::new(token_service, user_repository.clone()));

    TestContext {
        state: web::Data::new(AppState {
            auth_service,
            consignment_service,
        }),
        resolver: web::Data::new(auth_gate),
        user_repository,
    }
}

/// Registration body with every required field present
pub fn registration_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": "Ada",
        "lastName": "Okafor",
        "email": email,
        "phoneNumber": "+2348012345678",
        "companyName": "Okafor Exports",
        "userRole": "exporter",
        "companyType": "freight",
        "regNumber": "RC-10023",
        "primaryCountry": "Nigeria",
        "shippingVolume": "medium",
        "password": "pw1"
    })
}

pub const TEST_BOUNDARY: &str = "----tradeguard-test-boundary";

/// Build a multipart/form-data payload from text fields and an optional file part
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> (String, Vec<u8>) {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{TEST_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((name, filename, content)) = file {
        body.extend_from_slice(
            format!(
                "--{TEST_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{TEST_BOUNDARY}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={TEST_BOUNDARY}"),
        body,
    )
}

/// Complete consignment form as field pairs
pub fn consignment_fields(shipment_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("sender_name", "Okafor Exports".to_string()),
        ("sender_address", "14 Marina Road, Lagos".to_string()),
        ("sender_country", "Nigeria".to_string()),
        ("sender_mail", "ops@okafor.example".to_string()),
        ("sender_phone", "+2348012345678".to_string()),
        ("receiver_name", "Brandt GmbH".to_string()),
        ("receiver_address", "Hafenstrasse 2, Hamburg".to_string()),
        ("receiver_country", "Germany".to_string()),
        ("shipment_id", shipment_id.to_string()),
        ("shipment_date", "2025-03-14".to_string()),
        ("PackageQuantity", "12".to_string()),
        ("HS_code", "8471.30".to_string()),
        ("totalWeight", "103.5".to_string()),
        ("Item_desc", "Machined parts".to_string()),
    ]
}
