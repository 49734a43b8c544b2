//! Authentication services
//!
//! [`AuthService`] covers registration, login and profile editing.
//! [`AuthGate`] is the per-request bearer-token gate: cryptographic
//! verification followed by a live re-check against the credential store.

mod gate;
mod service;

pub use gate::{AuthGate, IdentityResolver, RequestIdentity};
pub use service::{AuthService, ProfileUpdate, RegisterUser};
