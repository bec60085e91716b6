//! Notification repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use vitrine_core::error::{AppError, ErrorKind};
use vitrine_core::result::AppResult;
use vitrine_core::types::pagination::{PageRequest, PageResponse};
use vitrine_entity::notification::Notification;

use crate::store::NotificationStore;

/// PostgreSQL-backed [`NotificationStore`].
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn create(&self, notification: &Notification) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO notifications (id, user_id, message, status, created_at, read_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(notification.id)
        .bind(notification.user_id)
        .bind(&notification.message)
        .bind(notification.status)
        .bind(notification.created_at)
        .bind(notification.read_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })?;
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
                })?;

        let notifs = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;

        Ok(PageResponse::new(
            notifs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND status = 'unread'",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    async fn mark_read(
        &self,
        id: Uuid,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> AppResult<Option<Notification>> {
        // COALESCE keeps the original read_at, making a repeat call a
        // no-op that still returns the row.
        sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET status = 'read', read_at = COALESCE(read_at, $3) \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))
    }
}
