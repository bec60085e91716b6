//! Route definitions for the Vitrine HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(notification_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, refresh, me. Login and refresh are the only
/// open routes besides health.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Client notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/clients/{client_id}/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/users/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/users/notifications/{notification_id}/mark-as-read",
            put(handlers::notification::mark_read),
        )
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/notifications/send-to-all-clients",
            post(handlers::admin::broadcast::send_to_all_clients),
        )
        .route(
            "/admin/stock/{product_id}/check",
            post(handlers::admin::stock::check_stock),
        )
        .route(
            "/admin/stock/low",
            get(handlers::admin::stock::list_low_stock),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
