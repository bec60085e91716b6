//! Role gates for protected routes.
//!
//! Gates only inspect the verified principal produced by the `AuthUser`
//! extractor; they never re-parse raw credentials.

use vitrine_core::error::AppError;
use vitrine_entity::user::UserRole;

use crate::extractors::AuthUser;

/// Checks that the authenticated principal has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Admin {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}

/// Checks that the authenticated principal has the Client role.
///
/// Admins are rejected too: client routes act on the caller's own
/// customer data, which an admin principal does not have.
pub fn require_client(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Client {
        return Err(AppError::forbidden("Client access required"));
    }
    Ok(())
}
