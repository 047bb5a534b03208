//! `SessionUser` extractor — the session gate.
//!
//! This is the single authorization checkpoint: every protected handler
//! takes a `SessionUser`, so by the time a handler body runs, the cookie
//! has been read, the token verified, and the acting user loaded.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use tandem_core::error::AppError;
use tandem_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct SessionUser(pub RequestContext);

impl SessionUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for SessionUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Session token travels in the designated HTTP-only cookie.
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config.auth.session_cookie_name)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::unauthenticated("No session token provided"))?;

        // Signature + expiry check; all failure modes collapse to 401.
        let user_id = state.tokens.verify(&token)?;

        // A token for a deleted user must not grant access. The projection
        // loaded here excludes the credential column. Storage failures
        // propagate as-is and render 500, not 401.
        let user = state
            .user_repo
            .find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::unauthenticated("User not found"))?;

        Ok(SessionUser(RequestContext::new(user)))
    }
}
