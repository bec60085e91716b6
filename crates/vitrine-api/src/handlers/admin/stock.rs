//! Admin stock handlers — low-stock check trigger and listing.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use vitrine_entity::product::Product;
use vitrine_service::stock::StockCheckOutcome;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// POST /api/admin/stock/{product_id}/check
///
/// Runs the low-stock check for one product and, when the threshold
/// condition holds, mails every admin.
pub async fn check_stock(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<ApiResponse<StockCheckOutcome>>, ApiError> {
    require_admin(&auth)?;

    let outcome = state.stock_service.check_product(product_id).await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// GET /api/admin/stock/low
pub async fn list_low_stock(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    require_admin(&auth)?;

    let products = state.stock_service.low_stock_products().await?;
    Ok(Json(ApiResponse::ok(products)))
}
