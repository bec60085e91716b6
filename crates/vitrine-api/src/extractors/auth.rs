//! `AuthUser` extractor — validates the bearer token and injects the
//! verified principal.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use vitrine_core::error::AppError;
use vitrine_service::context::Principal;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated principal available in handlers.
///
/// Rejections use two fixed messages: a missing header is "Not connected",
/// any invalid credential is "Invalid session".
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl std::ops::Deref for AuthUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Not connected"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid session"))?;

        let claims = state
            .jwt_decoder
            .decode_access_token(token)
            .map_err(|_| AppError::unauthorized("Invalid session"))?;

        Ok(AuthUser(Principal::new(
            claims.sub,
            claims.role,
            claims.email,
        )))
    }
}
