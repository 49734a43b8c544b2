//! Bearer-token authentication middleware for protecting API endpoints.
//!
//! The middleware reads the `Authorization` header, hands the token to the
//! core auth gate (signature check, expiry check, live re-fetch of the user
//! from the credential store) and injects the resolved identity into the
//! request extensions for handlers to extract.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;

use tg_core::errors::{DomainError, TokenError};
use tg_core::services::auth::{IdentityResolver, RequestIdentity};

use crate::handlers::error::domain_error_response;

/// Identity extractor for protected handlers
///
/// Available only behind [`JwtAuth`]; extraction fails with the same
/// missing-token response the middleware produces.
#[derive(Debug, Clone)]
pub struct AuthContext(pub RequestIdentity);

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<RequestIdentity>()
            .cloned()
            .map(AuthContext)
            .ok_or_else(|| gate_failure(DomainError::Token(TokenError::MissingToken)));

        ready(result)
    }
}

/// Bearer-token authentication middleware factory
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Bearer-token authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    return Err(gate_failure(DomainError::Token(TokenError::MissingToken)));
                }
            };

            let resolver = match req.app_data::<web::Data<Arc<dyn IdentityResolver>>>() {
                Some(resolver) => resolver.clone(),
                None => {
                    return Err(gate_failure(DomainError::Internal {
                        message: "Identity resolver not configured".to_string(),
                    }));
                }
            };

            match resolver.resolve(&token).await {
                Ok(identity) => {
                    req.extensions_mut().insert(identity);
                }
                Err(error) => return Err(gate_failure(error)),
            }

            service.call(req).await
        })
    }
}

/// Extract the token from the Authorization header
///
/// Clients send the token verbatim, without a "Bearer " prefix; the header
/// value is the token.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .map(str::to_owned)
}

/// Turn a gate failure into an actix error carrying the mapped response
fn gate_failure(error: DomainError) -> Error {
    log::warn!("Request rejected by auth gate: {}", error);
    let response = domain_error_response(&error);
    actix_web::error::InternalError::from_response(error, response).into()
}
