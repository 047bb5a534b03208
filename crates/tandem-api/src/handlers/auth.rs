//! Auth handlers — signup, login, logout, onboarding, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use validator::Validate;

use tandem_core::config::auth::AuthConfig;
use tandem_service::auth::AuthSession;

use crate::dto::request::{LoginRequest, OnboardingRequest, SignupRequest, validation_error};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, CookieJar, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate().map_err(|e| validation_error(&e))?;

    let session = state.auth_service.register(req.into()).await?;
    let jar = jar.add(session_cookie(&state.config.auth, &session));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(ApiResponse::ok(session.user.into())),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<UserResponse>>), ApiError> {
    let session = state.auth_service.authenticate(req.into()).await?;
    let jar = jar.add(session_cookie(&state.config.auth, &session));

    Ok((jar, Json(ApiResponse::ok(session.user.into()))))
}

/// POST /api/auth/logout
///
/// Stateless sessions: logout only clears the cookie; the token itself
/// stays valid until expiry.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let removal = Cookie::build((state.config.auth.session_cookie_name.clone(), ""))
        .path("/")
        .build();
    let jar = jar.remove(removal);

    (
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logout successful".to_string(),
        })),
    )
}

/// POST /api/auth/onboarding
pub async fn onboard(
    State(state): State<AppState>,
    session: SessionUser,
    Json(req): Json<OnboardingRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let updated = state
        .auth_service
        .complete_onboarding(session.user_id(), req.into())
        .await?;

    Ok(Json(ApiResponse::ok(updated.into())))
}

/// GET /api/auth/me
pub async fn me(session: SessionUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(session.0.user.into()))
}

/// Builds the HTTP-only session cookie carrying the token.
fn session_cookie(config: &AuthConfig, session: &AuthSession) -> Cookie<'static> {
    let max_age = session.expires_at - chrono::Utc::now();

    Cookie::build((config.session_cookie_name.clone(), session.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(config.cookie_secure)
        .max_age(time::Duration::seconds(max_age.num_seconds()))
        .build()
}
