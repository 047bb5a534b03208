//! Route definitions for the Tandem HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(chat_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(state.config.server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup, login, logout, onboarding, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/onboarding", post(handlers::auth::onboard))
        .route("/auth/me", get(handlers::auth::me))
}

/// Recommendation, friend, and friend-request endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::recommendations))
        .route("/users/friends", get(handlers::user::friends))
        .route(
            "/users/friend-request/{id}",
            post(handlers::user::send_friend_request),
        )
        .route(
            "/users/friend-request/{id}/accept",
            put(handlers::user::accept_friend_request),
        )
        .route(
            "/users/friend-requests",
            get(handlers::user::friend_requests),
        )
        .route(
            "/users/outgoing-friend-requests",
            get(handlers::user::outgoing_friend_requests),
        )
}

/// Chat directory endpoints
fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat/token", get(handlers::chat::token))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
