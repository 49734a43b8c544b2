//! Handler for POST /register

use actix_web::{web, HttpResponse};

use tg_core::repositories::{ConsignmentRepository, UserRepository};
use tg_shared::errors::{error_codes, ErrorResponse};

use crate::dto::auth_dto::{RegisterRequest, RegisterResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Register a new user account
///
/// # Response
///
/// ## Success (201 Created)
/// The identifier of the new account.
///
/// ## Errors
/// - 400 Bad Request: missing required fields, or a role/company type/
///   shipping volume outside its closed set
/// - 409 Conflict: email already registered
/// - 500 Internal Server Error: store failure
pub async fn register<U, C>(
    state: web::Data<AppState<U, C>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ConsignmentRepository + 'static,
{
    let register = match request.into_inner().into_register_user() {
        Some(register) => register,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::VALIDATION_ERROR,
                "Missing required fields",
            ));
        }
    };

    match state.auth_service.register(register).await {
        Ok(user_id) => HttpResponse::Created().json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user_id,
        }),
        Err(error) => handle_domain_error(error),
    }
}
