//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::NotificationStatus;

/// A notification delivered to one client.
///
/// Broadcasts are fanned out at creation time: one row per recipient, so
/// each client owns an independent read status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient client.
    pub user_id: Uuid,
    /// Message text.
    pub message: String,
    /// Read status.
    pub status: NotificationStatus,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// When the notification was read (set once, never cleared).
    pub read_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Create a fresh unread notification for a recipient.
    pub fn new(user_id: Uuid, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            message: message.into(),
            status: NotificationStatus::Unread,
            created_at: Utc::now(),
            read_at: None,
        }
    }

    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }

    /// Transition to read, stamping `read_at` on the first call.
    ///
    /// Idempotent: marking an already-read notification leaves it
    /// unchanged.
    pub fn mark_read(&mut self, at: DateTime<Utc>) {
        if self.status == NotificationStatus::Unread {
            self.status = NotificationStatus::Read;
            self.read_at = Some(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unread() {
        let n = Notification::new(Uuid::new_v4(), "hello");
        assert!(n.is_unread());
        assert!(n.read_at.is_none());
    }

    #[test]
    fn test_mark_read_is_one_way_and_idempotent() {
        let mut n = Notification::new(Uuid::new_v4(), "hello");
        let first = Utc::now();
        n.mark_read(first);
        assert_eq!(n.status, NotificationStatus::Read);
        assert_eq!(n.read_at, Some(first));

        // A later call must not move the read timestamp.
        n.mark_read(first + chrono::Duration::minutes(5));
        assert_eq!(n.read_at, Some(first));
    }
}
