//! Core business logic and domain layer for the TradeGuard backend
//!
//! This crate is framework-agnostic: it defines the domain entities, the
//! repository traits the infrastructure layer implements, and the services
//! (authentication, token handling, consignment management) the API layer
//! composes into endpoints.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
