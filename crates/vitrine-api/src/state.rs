//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use vitrine_auth::jwt::decoder::JwtDecoder;
use vitrine_core::config::AppConfig;
use vitrine_service::auth::AuthService;
use vitrine_service::notification::NotificationService;
use vitrine_service::stock::StockAlertService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Authentication service.
    pub auth_service: Arc<AuthService>,
    /// Notification service.
    pub notification_service: Arc<NotificationService>,
    /// Stock alert service.
    pub stock_service: Arc<StockAlertService>,
}
