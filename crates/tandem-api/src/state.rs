//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use tandem_auth::token::SessionTokenService;
use tandem_core::config::AppConfig;
use tandem_database::repositories::friend_request::FriendRequestRepository;
use tandem_database::repositories::user::UserRepository;
use tandem_directory::DirectoryProvider;
use tandem_service::auth::AuthService;
use tandem_service::friends::FriendService;

/// Application state containing all shared dependencies.
///
/// Constructed once at startup and passed to every Axum handler via
/// `State<AppState>`. All fields are `Arc`-wrapped for cheap cloning across
/// tasks; there is no ambient global state anywhere.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session token issuing/verification.
    pub tokens: Arc<SessionTokenService>,
    /// User repository (used directly by the session gate).
    pub user_repo: Arc<UserRepository>,
    /// Friend-request repository.
    pub request_repo: Arc<FriendRequestRepository>,
    /// Signup/login/onboarding workflow.
    pub auth_service: Arc<AuthService>,
    /// Friend-relationship workflow.
    pub friend_service: Arc<FriendService>,
    /// External chat directory.
    pub directory: Arc<dyn DirectoryProvider>,
}
