//! Store traits for persistent entities.
//!
//! Each trait is implemented over PostgreSQL in [`crate::repositories`]
//! and in memory in [`crate::memory`]. Services depend only on these
//! traits, never on a concrete backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use vitrine_core::result::AppResult;
use vitrine_core::types::pagination::{PageRequest, PageResponse};
use vitrine_entity::notification::Notification;
use vitrine_entity::product::Product;
use vitrine_entity::user::{User, UserRole};

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List every user with the given role, unpaginated.
    ///
    /// Used by fan-out flows (broadcast, admin alert mail) that must reach
    /// all recipients.
    async fn find_all_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;

    /// Insert a new user.
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Stamp a successful login.
    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<()>;
}

/// Persistence operations for notifications.
#[async_trait]
pub trait NotificationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new notification.
    async fn create(&self, notification: &Notification) -> AppResult<()>;

    /// List notifications for a recipient, newest first (ties broken by
    /// id, descending).
    async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>>;

    /// Count unread notifications for a recipient.
    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64>;

    /// Mark one of the recipient's notifications as read.
    ///
    /// Idempotent: an already-read notification is returned unchanged,
    /// keeping its original `read_at`. Returns `None` when no such
    /// notification exists for this recipient.
    async fn mark_read(
        &self,
        id: Uuid,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> AppResult<Option<Notification>>;
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a product by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// List all products at or below their stock threshold.
    async fn find_low_stock(&self) -> AppResult<Vec<Product>>;

    /// Insert a new product.
    async fn create(&self, product: &Product) -> AppResult<()>;
}
