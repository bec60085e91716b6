//! Admin broadcast handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use vitrine_core::error::AppError;
use vitrine_service::notification::BroadcastReport;

use crate::dto::request::BroadcastRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// POST /api/users/notifications/send-to-all-clients
pub async fn send_to_all_clients(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BroadcastRequest>,
) -> Result<Json<ApiResponse<BroadcastReport>>, ApiError> {
    require_admin(&auth)?;

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let report = state.notification_service.broadcast(&req.message).await?;

    Ok(Json(ApiResponse::ok(report)))
}
