//! Application factory
//!
//! Builds the actix application from injected services. The factory is
//! generic over the repository traits: the binary passes the MySQL
//! implementations, the integration tests pass the in-memory mocks.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use tg_core::repositories::{ConsignmentRepository, UserRepository};
use tg_core::services::auth::IdentityResolver;
use tg_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::auth::JwtAuth;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{authenticate::authenticate, edit_profile::edit_profile, register::register};
use crate::routes::consignments::{
    add::add_consignment, download_invoice::download_invoice, fetch_all::fetch_consignments,
    fetch_one::fetch_consignment, update_compliance::update_compliance,
};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, C>(
    state: web::Data<AppState<U, C>>,
    resolver: web::Data<Arc<dyn IdentityResolver>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: ConsignmentRepository + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(state)
        .app_data(resolver)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // User management
        .route("/register", web::post().to(register::<U, C>))
        .route("/authenticate", web::post().to(authenticate::<U, C>))
        .route(
            "/edit-profile",
            web::put().to(edit_profile::<U, C>).wrap(JwtAuth::new()),
        )
        // Consignment management
        .route("/add-consignment", web::post().to(add_consignment::<U, C>))
        .route(
            "/fetch-consignments",
            web::get().to(fetch_consignments::<U, C>).wrap(JwtAuth::new()),
        )
        .route(
            "/fetch-consignment/{id}",
            web::get().to(fetch_consignment::<U, C>).wrap(JwtAuth::new()),
        )
        .route(
            "/download-invoice/{id}",
            web::get().to(download_invoice::<U, C>).wrap(JwtAuth::new()),
        )
        .route(
            "/update-compliance/{id}",
            web::put().to(update_compliance::<U, C>).wrap(JwtAuth::new()),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tradeguard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
