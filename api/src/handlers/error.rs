//! Domain error to HTTP response mapping
//!
//! Every failure is caught here and turned into a structured body with a
//! `success` flag, an error code and a human-readable message. Token
//! failures map to 403 (the frontend's session-expiry signal), credential
//! failures to 401, uniqueness conflicts to 409, validation to 400 with the
//! full per-field list, and store failures to 500 carrying the raw message.

use actix_web::HttpResponse;

use tg_core::errors::{AuthError, DomainError, TokenError};
use tg_shared::errors::{error_codes, ErrorResponse};

/// Build the HTTP response for a domain error
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Token(token_error) => match token_error {
            TokenError::MissingToken => HttpResponse::Forbidden().json(ErrorResponse::new(
                error_codes::TOKEN_MISSING,
                "Token is missing",
            )),
            TokenError::TokenExpired => HttpResponse::Forbidden().json(ErrorResponse::new(
                error_codes::TOKEN_EXPIRED,
                "Token has expired",
            )),
            TokenError::InvalidSignature | TokenError::InvalidTokenFormat => {
                HttpResponse::Forbidden().json(ErrorResponse::new(
                    error_codes::TOKEN_INVALID,
                    "Token is invalid",
                ))
            }
            TokenError::TokenGenerationFailed => HttpResponse::InternalServerError().json(
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "Token generation failed"),
            ),
        },

        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new(error_codes::INVALID_CREDENTIALS, "Invalid credentials"),
            ),
            AuthError::UserNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
                error_codes::NOT_FOUND,
                "User not found",
            )),
            AuthError::ProfileOwnership => HttpResponse::Forbidden().json(ErrorResponse::new(
                error_codes::FORBIDDEN,
                "You can only edit your own profile",
            )),
        },

        DomainError::Validation { errors } => HttpResponse::BadRequest().json(
            ErrorResponse::new(error_codes::VALIDATION_ERROR, "Data type mismatch")
                .with_details(errors.clone()),
        ),

        DomainError::InvalidEnum { .. } => HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::VALIDATION_ERROR,
            error.to_string(),
        )),

        DomainError::DuplicateKey { field } => {
            let message = match field.as_str() {
                "email" => "Email already exists".to_string(),
                "shipment_id" => "Shipment ID already exists".to_string(),
                other => format!("Duplicate value for {}", other),
            };
            HttpResponse::Conflict()
                .json(ErrorResponse::new(error_codes::DUPLICATE_KEY, message))
        }

        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        )),

        DomainError::Database { message } => HttpResponse::InternalServerError().json(
            ErrorResponse::new(error_codes::DATABASE_ERROR, message.clone()),
        ),

        DomainError::Internal { message } => HttpResponse::InternalServerError().json(
            ErrorResponse::new(error_codes::INTERNAL_ERROR, message.clone()),
        ),
    }
}

/// Log and convert a domain error into its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);
    domain_error_response(&error)
}

/// Convert `validator` derive failures into the standard 400 body
pub fn handle_validation_errors(errors: validator::ValidationErrors) -> HttpResponse {
    let details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{} {}", field, message),
                None => format!("{} is invalid", field),
            })
        })
        .collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .with_details(details),
    )
}
