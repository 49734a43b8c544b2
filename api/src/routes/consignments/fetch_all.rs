//! Handler for GET /fetch-consignments

use actix_web::{web, HttpResponse};

use tg_core::repositories::{ConsignmentRepository, UserRepository};

use crate::dto::consignment_dto::ConsignmentResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// List all consignments, newest first
///
/// An empty store answers 404, not an empty array; the frontend relies on
/// this to show its empty state.
pub async fn fetch_consignments<U, C>(state: web::Data<AppState<U, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ConsignmentRepository + 'static,
{
    match state.consignment_service.fetch_all().await {
        Ok(consignments) => {
            let response: Vec<ConsignmentResponse> = consignments
                .into_iter()
                .map(ConsignmentResponse::from)
                .collect();
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(error),
    }
}
