//! Authentication and profile route handlers
//!
//! - `POST /register` - create a user account
//! - `POST /authenticate` - email/password login, returns a bearer token
//! - `PUT /edit-profile` - bearer-protected, self-only profile update

pub mod authenticate;
pub mod edit_profile;
pub mod register;
