//! Application builder — wires repositories, services, router, and server.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use tandem_auth::password::{CredentialPolicy, PasswordHasher};
use tandem_auth::token::SessionTokenService;
use tandem_core::config::AppConfig;
use tandem_core::error::AppError;
use tandem_database::repositories::friend_request::FriendRequestRepository;
use tandem_database::repositories::user::UserRepository;
use tandem_service::auth::AuthService;
use tandem_service::friends::FriendService;

use crate::router::build_router;
use crate::state::AppState;

/// Constructs the full application state from configuration and a pool.
///
/// Every store and service is built exactly once here and handed around by
/// `Arc`; nothing reads ambient globals.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let config = Arc::new(config);

    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let request_repo = Arc::new(FriendRequestRepository::new(db_pool.clone()));

    let tokens = Arc::new(SessionTokenService::new(&config.auth));
    let hasher = Arc::new(PasswordHasher::new());
    let policy = CredentialPolicy::new(&config.auth);

    let directory = tandem_directory::build_provider(&config.directory)?;

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&hasher),
        policy,
        Arc::clone(&tokens),
        Arc::clone(&directory),
    )?);
    let friend_service = Arc::new(FriendService::new(
        Arc::clone(&user_repo),
        Arc::clone(&request_repo),
    ));

    Ok(AppState {
        config,
        db_pool,
        tokens,
        user_repo,
        request_repo,
        auth_service,
        friend_service,
        directory,
    })
}

/// Runs the Tandem server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Tandem server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Tandem server shut down gracefully");
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
