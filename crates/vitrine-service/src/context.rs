//! The verified principal attached to every authenticated request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_entity::user::UserRole;

/// The verified identity/role pair a gate produces.
///
/// Built by the API layer after validating the caller's signed token;
/// downstream gates and services only ever inspect this, never raw
/// credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// The email (convenience field from token claims).
    pub email: String,
}

impl Principal {
    /// Creates a new principal.
    pub fn new(user_id: Uuid, role: UserRole, email: String) -> Self {
        Self {
            user_id,
            role,
            email,
        }
    }

    /// Returns whether the principal is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns whether the principal is a client.
    pub fn is_client(&self) -> bool {
        self.role.is_client()
    }
}
