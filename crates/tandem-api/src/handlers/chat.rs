//! Chat handlers — directory token minting.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, ChatTokenResponse};
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /api/chat/token
///
/// Mints a directory user token so the client can connect to the external
/// chat/video provider as the authenticated user.
pub async fn token(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<ChatTokenResponse>>, ApiError> {
    let token = state.directory.issue_token(session.user_id())?;

    Ok(Json(ApiResponse::ok(ChatTokenResponse { token })))
}
