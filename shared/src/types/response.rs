//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Standard success response wrapper
///
/// All mutation endpoints answer with a `success` flag and a
/// human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,
}

impl ApiResponse {
    /// Create a successful response with a message
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response = ApiResponse::success("Profile updated successfully");
        assert!(response.success);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Profile updated successfully");
    }
}
