//! Result of a successful authentication.

use crate::domain::entities::user::User;

/// Token plus the authenticated user's profile
///
/// The API layer projects the user into a response DTO; the password
/// digest never crosses that boundary.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    /// Signed bearer token
    pub token: String,

    /// The freshly loaded user record
    pub user: User,
}
