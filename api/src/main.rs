//! TradeGuard API server entry point

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use tg_api::app::create_app;
use tg_api::routes::AppState;
use tg_core::services::auth::{AuthGate, AuthService, IdentityResolver};
use tg_core::services::consignment::ConsignmentService;
use tg_core::services::password::PasswordHasher;
use tg_core::services::token::{TokenConfig, TokenService};
use tg_infra::database::connection::DatabasePool;
use tg_infra::database::mysql::{MySqlConsignmentRepository, MySqlUserRepository};
use tg_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting TradeGuard API server");

    // Load configuration; the signing secret is fixed from here on
    let config = AppConfig::from_env();
    if config.environment.is_production() && config.jwt.is_using_default_secret() {
        panic!("JWT_SECRET must be configured in production");
    }

    // Database connection pool
    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let consignment_repository =
        Arc::new(MySqlConsignmentRepository::new(pool.get_pool().clone()));

    // Services
    let token_service = Arc::new(TokenService::new(TokenConfig::from(&config.jwt)));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        token_service.clone(),
        PasswordHasher::new(),
    ));
    let consignment_service = Arc::new(ConsignmentService::new(consignment_repository));
    let auth_gate: Arc<dyn IdentityResolver> =
        Arc::new(AuthGate::new(token_service, user_repository));

    let state = web::Data::new(AppState {
        auth_service,
        consignment_service,
    });
    let resolver = web::Data::new(auth_gate);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone(), resolver.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
