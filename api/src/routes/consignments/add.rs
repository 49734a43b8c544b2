//! Handler for POST /add-consignment

use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use futures_util::TryStreamExt;

use tg_core::errors::DomainError;
use tg_core::repositories::{ConsignmentRepository, UserRepository};
use tg_core::services::consignment::{consignment_rules, draft_from_fields};
use tg_shared::validation::{validate_fields, DATE_FORMAT};

use crate::dto::consignment_dto::AddConsignmentResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Form field carrying the uploaded invoice document
const INVOICE_FIELD: &str = "commercial_invoice";

/// Submit a new consignment
///
/// Accepts a multipart form: text fields are run through the declarative
/// field validator (every failure reported at once), the optional
/// `commercial_invoice` part is stored as the attached document. The record
/// always starts with compliance status `pending`.
///
/// # Response
///
/// ## Success (201 Created)
/// The identifier of the new record.
///
/// ## Errors
/// - 400 Bad Request: validation failures, full list in `details`
/// - 409 Conflict: shipment identifier already exists
/// - 500 Internal Server Error: store failure
pub async fn add_consignment<U, C>(
    state: web::Data<AppState<U, C>>,
    payload: Multipart,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ConsignmentRepository + 'static,
{
    let (mut fields, invoice) = match collect_form(payload).await {
        Ok(parts) => parts,
        Err(error) => {
            return handle_domain_error(DomainError::Validation {
                errors: vec![format!("Malformed multipart payload: {}", error)],
            });
        }
    };

    // Shipment date defaults to today when the form omits it.
    fields
        .entry("shipment_date".to_string())
        .or_insert_with(|| Utc::now().format(DATE_FORMAT).to_string());

    let values = match validate_fields(&consignment_rules(), &fields) {
        Ok(values) => values,
        Err(errors) => return handle_domain_error(DomainError::Validation { errors }),
    };

    let draft = match draft_from_fields(&values, invoice) {
        Ok(draft) => draft,
        Err(errors) => return handle_domain_error(DomainError::Validation { errors }),
    };

    match state.consignment_service.create(draft).await {
        Ok(id) => HttpResponse::Created().json(AddConsignmentResponse {
            success: true,
            message: "Consignment added successfully".to_string(),
            uuid: id,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Split a multipart payload into text fields and the invoice bytes
async fn collect_form(
    mut payload: Multipart,
) -> Result<(HashMap<String, String>, Option<Vec<u8>>), actix_multipart::MultipartError> {
    let mut fields = HashMap::new();
    let mut invoice = None;

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().to_string();

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            data.extend_from_slice(&chunk);
        }

        if name == INVOICE_FIELD {
            if !data.is_empty() {
                invoice = Some(data);
            }
        } else {
            fields.insert(name, String::from_utf8_lossy(&data).into_owned());
        }
    }

    Ok((fields, invoice))
}
