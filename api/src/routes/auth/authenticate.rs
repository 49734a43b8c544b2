//! Handler for POST /authenticate

use actix_web::{web, HttpResponse};
use validator::Validate;

use tg_core::repositories::{ConsignmentRepository, UserRepository};

use crate::dto::auth_dto::{AuthenticateRequest, AuthenticateResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Authenticate with email and password
///
/// # Response
///
/// ## Success (200 OK)
/// Token plus the profile projection of the authenticated user.
///
/// ## Errors
/// - 400 Bad Request: malformed request data
/// - 401 Unauthorized: unknown email or wrong password
/// - 500 Internal Server Error: store failure
pub async fn authenticate<U, C>(
    state: web::Data<AppState<U, C>>,
    request: web::Json<AuthenticateRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ConsignmentRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(AuthenticateResponse::from(auth)),
        Err(error) => handle_domain_error(error),
    }
}
