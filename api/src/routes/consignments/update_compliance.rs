//! Handler for PUT /update-compliance/{id}

use actix_web::{web, HttpResponse};

use tg_core::repositories::{ConsignmentRepository, UserRepository};
use tg_shared::types::ApiResponse;

use crate::dto::consignment_dto::UpdateComplianceRequest;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Update the compliance status of a consignment
///
/// # Errors
/// - 400 Bad Request: status outside {pending, compliant, flagged}
/// - 404 Not Found: no record with that identifier
pub async fn update_compliance<U, C>(
    state: web::Data<AppState<U, C>>,
    path: web::Path<i64>,
    request: web::Json<UpdateComplianceRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ConsignmentRepository + 'static,
{
    match state
        .consignment_service
        .update_compliance(path.into_inner(), &request.compliant)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(
            "Compliance status updated successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
