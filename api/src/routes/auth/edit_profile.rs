//! Handler for PUT /edit-profile

use actix_web::{web, HttpResponse};

use tg_core::repositories::{ConsignmentRepository, UserRepository};
use tg_shared::types::ApiResponse;

use crate::dto::auth_dto::EditProfileRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Update the authenticated user's profile
///
/// Self-only: the target `user_id` in the body must match the identity the
/// gate resolved from the token. Absent fields keep their stored values; a
/// password change requires the current password.
///
/// # Errors
/// - 401 Unauthorized: password change with a wrong current password
/// - 403 Forbidden: missing/invalid token, or editing another account
/// - 500 Internal Server Error: store failure
pub async fn edit_profile<U, C>(
    auth: AuthContext,
    state: web::Data<AppState<U, C>>,
    request: web::Json<EditProfileRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ConsignmentRepository + 'static,
{
    let update = request.into_inner().into_profile_update();

    match state
        .auth_service
        .edit_profile(auth.0.user_id, update)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success("Profile updated successfully")),
        Err(error) => handle_domain_error(error),
    }
}
