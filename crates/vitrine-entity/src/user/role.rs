//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the storefront.
///
/// Admins operate the store; clients are customers. Every authenticated
/// principal carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Store operator with access to the admin panel.
    Admin,
    /// Customer account.
    Client,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is a client.
    pub fn is_client(&self) -> bool {
        matches!(self, Self::Client)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = vitrine_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "client" => Ok(Self::Client),
            _ => Err(vitrine_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, client"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_predicates() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Admin.is_client());
        assert!(UserRole::Client.is_client());
        assert!(!UserRole::Client.is_admin());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("CLIENT".parse::<UserRole>().unwrap(), UserRole::Client);
        assert!("manager".parse::<UserRole>().is_err());
    }
}
