//! Notification handlers (client routes).

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use vitrine_core::types::pagination::PageResponse;
use vitrine_entity::notification::Notification;

use crate::dto::response::{ApiResponse, CountResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_client;
use crate::state::AppState;

/// GET /api/users/clients/{client_id}/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(client_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Notification>>>, ApiError> {
    require_client(&auth)?;

    let page = state
        .notification_service
        .list_for_client(&auth, client_id, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/users/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    require_client(&auth)?;

    let count = state.notification_service.unread_count(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/users/notifications/{notification_id}/mark-as-read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    require_client(&auth)?;

    let notification = state
        .notification_service
        .mark_read(&auth, notification_id)
        .await?;

    Ok(Json(ApiResponse::ok(notification)))
}
