//! Auth handlers — login, refresh, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use vitrine_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest};
use crate::dto::response::{ApiResponse, LoginResponse, RefreshResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: outcome.tokens.access_token,
        refresh_token: outcome.tokens.refresh_token,
        access_expires_at: outcome.tokens.access_expires_at,
        refresh_expires_at: outcome.tokens.refresh_expires_at,
        user: UserResponse::from(outcome.user),
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<RefreshResponse>>, ApiError> {
    let tokens = state.auth_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(RefreshResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        access_expires_at: tokens.access_expires_at,
        refresh_expires_at: tokens.refresh_expires_at,
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.auth_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
