//! Notification service.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use vitrine_core::error::AppError;
use vitrine_core::result::AppResult;
use vitrine_core::types::pagination::{PageRequest, PageResponse};
use vitrine_database::store::{NotificationStore, UserStore};
use vitrine_entity::notification::Notification;
use vitrine_entity::user::UserRole;

use crate::context::Principal;

/// One recipient the broadcast could not reach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastFailure {
    /// The client whose notification could not be created.
    pub client_id: Uuid,
    /// What went wrong.
    pub error: String,
}

/// Outcome of a broadcast fan-out.
///
/// Recipients are processed independently; one failed insert never aborts
/// the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastReport {
    /// Number of client accounts enumerated.
    pub total_clients: u64,
    /// Notifications actually created.
    pub created: u64,
    /// Per-recipient failures.
    pub failed: Vec<BroadcastFailure>,
}

/// Manages client notifications and admin broadcasts.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notifications: Arc<dyn NotificationStore>,
    users: Arc<dyn UserStore>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notifications: Arc<dyn NotificationStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            notifications,
            users,
        }
    }

    /// Lists a client's notifications, newest first.
    ///
    /// Clients may only read their own feed.
    pub async fn list_for_client(
        &self,
        principal: &Principal,
        client_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        if principal.user_id != client_id {
            return Err(AppError::forbidden(
                "Clients may only read their own notifications",
            ));
        }

        self.notifications.find_by_user(client_id, &page).await
    }

    /// Counts the caller's unread notifications.
    pub async fn unread_count(&self, principal: &Principal) -> AppResult<i64> {
        self.notifications.count_unread(principal.user_id).await
    }

    /// Marks one of the caller's notifications as read.
    ///
    /// Idempotent on already-read notifications; an unknown id (including
    /// another client's) is a not-found error, never a silent success.
    pub async fn mark_read(&self, principal: &Principal, id: Uuid) -> AppResult<Notification> {
        self.notifications
            .mark_read(id, principal.user_id, Utc::now())
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))
    }

    /// Broadcasts a message to every client account.
    ///
    /// Creates one unread notification per client. Each recipient is
    /// handled independently and failures are collected into the report
    /// instead of aborting the fan-out.
    pub async fn broadcast(&self, message: &str) -> AppResult<BroadcastReport> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::validation("Broadcast message must not be empty"));
        }

        let clients = self.users.find_all_by_role(UserRole::Client).await?;

        let mut report = BroadcastReport {
            total_clients: clients.len() as u64,
            created: 0,
            failed: Vec::new(),
        };

        for client in &clients {
            let notification = Notification::new(client.id, message);
            match self.notifications.create(&notification).await {
                Ok(()) => report.created += 1,
                Err(e) => {
                    warn!(client_id = %client.id, error = %e, "Broadcast delivery failed");
                    report.failed.push(BroadcastFailure {
                        client_id: client.id,
                        error: e.message.clone(),
                    });
                }
            }
        }

        info!(
            total = report.total_clients,
            created = report.created,
            failed = report.failed.len(),
            "Broadcast fan-out complete"
        );

        Ok(report)
    }
}
