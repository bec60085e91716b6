//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Admin broadcast request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BroadcastRequest {
    /// Message sent to every client.
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}
