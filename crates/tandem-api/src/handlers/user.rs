//! User relationship handlers — recommendations, friends, friend requests.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::response::{
    ApiResponse, FriendRequestResponse, FriendRequestsResponse, IncomingRequestResponse,
    OutgoingRequestResponse, UserResponse, UserSummaryResponse,
};
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /api/users
///
/// Recommended language partners: onboarded users who are neither the
/// caller nor already friends. A pending request does not exclude anyone.
pub async fn recommendations(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state.friend_service.recommendations(&session).await?;

    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/users/friends
pub async fn friends(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<Vec<UserSummaryResponse>>>, ApiError> {
    let friends = state.friend_service.list_friends(&session).await?;

    Ok(Json(ApiResponse::ok(
        friends.into_iter().map(UserSummaryResponse::from).collect(),
    )))
}

/// POST /api/users/friend-request/{id}
pub async fn send_friend_request(
    State(state): State<AppState>,
    session: SessionUser,
    Path(recipient_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<FriendRequestResponse>>), ApiError> {
    let request = state
        .friend_service
        .send_request(&session, recipient_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request.into()))))
}

/// PUT /api/users/friend-request/{id}/accept
pub async fn accept_friend_request(
    State(state): State<AppState>,
    session: SessionUser,
    Path(request_id): Path<Uuid>,
) -> Result<Json<ApiResponse<FriendRequestResponse>>, ApiError> {
    let accepted = state
        .friend_service
        .accept_request(&session, request_id)
        .await?;

    Ok(Json(ApiResponse::ok(accepted.into())))
}

/// GET /api/users/friend-requests
pub async fn friend_requests(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<FriendRequestsResponse>>, ApiError> {
    let incoming = state.friend_service.list_incoming(&session).await?;
    let outgoing = state.friend_service.list_outgoing(&session).await?;

    Ok(Json(ApiResponse::ok(FriendRequestsResponse {
        incoming: incoming
            .into_iter()
            .map(IncomingRequestResponse::from)
            .collect(),
        outgoing: outgoing
            .into_iter()
            .map(OutgoingRequestResponse::from)
            .collect(),
    })))
}

/// GET /api/users/outgoing-friend-requests
pub async fn outgoing_friend_requests(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<Vec<OutgoingRequestResponse>>>, ApiError> {
    let outgoing = state.friend_service.list_outgoing(&session).await?;

    Ok(Json(ApiResponse::ok(
        outgoing
            .into_iter()
            .map(OutgoingRequestResponse::from)
            .collect(),
    )))
}
