//! In-memory store implementations.
//!
//! Backed by `dashmap`, these mirror the PostgreSQL repositories'
//! observable behavior (ordering, idempotence, scoping) and are used by
//! the test suite and for local development without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use vitrine_core::result::AppResult;
use vitrine_core::types::pagination::{PageRequest, PageResponse};
use vitrine_entity::notification::Notification;
use vitrine_entity::product::Product;
use vitrine_entity::user::{User, UserRole};

use crate::store::{NotificationStore, ProductStore, UserStore};

/// In-memory [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .map(|u| u.clone()))
    }

    async fn find_all_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|u| u.role == role)
            .map(|u| u.clone())
            .collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        if let Some(mut user) = self.users.get_mut(&id) {
            user.last_login_at = Some(at);
            user.updated_at = at;
        }
        Ok(())
    }
}

/// In-memory [`NotificationStore`].
#[derive(Debug, Default)]
pub struct MemoryNotificationStore {
    notifications: DashMap<Uuid, Notification>,
}

impl MemoryNotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn create(&self, notification: &Notification) -> AppResult<()> {
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let mut notifs: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .map(|n| n.clone())
            .collect();
        // Newest first, ties broken by id descending.
        notifs.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let total = notifs.len() as u64;
        let items: Vec<Notification> = notifs
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        Ok(self
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && n.is_unread())
            .count() as i64)
    }

    async fn mark_read(
        &self,
        id: Uuid,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> AppResult<Option<Notification>> {
        match self.notifications.get_mut(&id) {
            Some(mut n) if n.user_id == user_id => {
                n.mark_read(at);
                Ok(Some(n.clone()))
            }
            _ => Ok(None),
        }
    }
}

/// In-memory [`ProductStore`].
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: DashMap<Uuid, Product>,
}

impl MemoryProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.products.get(&id).map(|p| p.clone()))
    }

    async fn find_low_stock(&self) -> AppResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .map(|p| p.clone())
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn create(&self, product: &Product) -> AppResult<()> {
        self.products.insert(product.id, product.clone());
        Ok(())
    }
}
