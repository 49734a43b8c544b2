//! Handler for GET /fetch-consignment/{id}

use actix_web::{web, HttpResponse};

use tg_core::repositories::{ConsignmentRepository, UserRepository};

use crate::dto::consignment_dto::ConsignmentResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Fetch a single consignment by identifier
pub async fn fetch_consignment<U, C>(
    state: web::Data<AppState<U, C>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ConsignmentRepository + 'static,
{
    match state.consignment_service.fetch_one(path.into_inner()).await {
        Ok(consignment) => HttpResponse::Ok().json(ConsignmentResponse::from(consignment)),
        Err(error) => handle_domain_error(error),
    }
}
