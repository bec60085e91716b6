//! Application builder — wires repositories, services, and the router,
//! then runs the HTTP server.

use std::sync::Arc;

use sqlx::PgPool;

use vitrine_auth::jwt::decoder::JwtDecoder;
use vitrine_auth::jwt::encoder::JwtEncoder;
use vitrine_auth::password::hasher::PasswordHasher;
use vitrine_core::config::AppConfig;
use vitrine_core::error::AppError;
use vitrine_database::repositories::{NotificationRepository, ProductRepository, UserRepository};
use vitrine_database::store::{NotificationStore, ProductStore, UserStore};
use vitrine_mailer::transport::{HttpMailTransport, MailTransport};
use vitrine_service::auth::AuthService;
use vitrine_service::notification::NotificationService;
use vitrine_service::stock::StockAlertService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let user_repo: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));
    let notification_repo: Arc<dyn NotificationStore> =
        Arc::new(NotificationRepository::new(db_pool.clone()));
    let product_repo: Arc<dyn ProductStore> = Arc::new(ProductRepository::new(db_pool));

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let mail_transport: Arc<dyn MailTransport> = Arc::new(HttpMailTransport::new(&config.mail)?);

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        password_hasher,
        jwt_encoder,
        Arc::clone(&jwt_decoder),
    ));
    let notification_service = Arc::new(NotificationService::new(
        notification_repo,
        Arc::clone(&user_repo),
    ));
    let stock_service = Arc::new(StockAlertService::new(
        product_repo,
        user_repo,
        mail_transport,
        &config.mail.storefront_base_url,
    ));

    Ok(AppState {
        config: Arc::new(config),
        jwt_decoder,
        auth_service,
        notification_service,
        stock_service,
    })
}

/// Runs the Vitrine server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool)?;
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Vitrine server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Vitrine server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
