//! Notification read-status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Read status of a notification.
///
/// The only legal transition is `Unread` to `Read`; a notification is
/// never returned to unread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Not yet read by the recipient.
    Unread,
    /// Read by the recipient.
    Read,
}

impl NotificationStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
