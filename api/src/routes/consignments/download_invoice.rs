//! Handler for GET /download-invoice/{id}

use actix_web::http::header;
use actix_web::{web, HttpResponse};

use tg_core::repositories::{ConsignmentRepository, UserRepository};

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Download the commercial invoice attached to a consignment
///
/// Answers the raw PDF bytes as an attachment named after the business
/// shipment identifier. A record without an uploaded document is a 404.
pub async fn download_invoice<U, C>(
    state: web::Data<AppState<U, C>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ConsignmentRepository + 'static,
{
    match state
        .consignment_service
        .download_invoice(path.into_inner())
        .await
    {
        Ok(invoice) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", invoice.filename),
            ))
            .body(invoice.content),
        Err(error) => handle_domain_error(error),
    }
}
