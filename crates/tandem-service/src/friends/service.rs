//! The friend request/accept state machine.
//!
//! A pair of users is in exactly one of three states: unrelated, request
//! pending (in one orientation), or friends. This service enforces the
//! transitions; the storage layer's unordered-pair index and the
//! transactional accept enforce them under races.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use tandem_core::error::AppError;
use tandem_database::repositories::friend_request::FriendRequestRepository;
use tandem_database::repositories::user::UserRepository;
use tandem_entity::friend_request::{FriendRequest, FriendRequestDetail};
use tandem_entity::user::{UserProfile, UserSummary};

use crate::context::RequestContext;

/// Handles friend requests, acceptance, and relationship queries.
#[derive(Debug, Clone)]
pub struct FriendService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Friend-request repository.
    request_repo: Arc<FriendRequestRepository>,
}

impl FriendService {
    /// Creates a new friend service.
    pub fn new(user_repo: Arc<UserRepository>, request_repo: Arc<FriendRequestRepository>) -> Self {
        Self {
            user_repo,
            request_repo,
        }
    }

    /// Sends a friend request from the acting user to `target`.
    ///
    /// The pre-checks give specific errors; the unordered-pair index in the
    /// store is what actually rejects a duplicate created concurrently in
    /// either direction.
    pub async fn send_request(
        &self,
        ctx: &RequestContext,
        target: Uuid,
    ) -> Result<FriendRequest, AppError> {
        let actor = ctx.user_id();

        if actor == target {
            return Err(AppError::validation(
                "You can't send a friend request to yourself",
            ));
        }

        if !self.user_repo.exists(target).await? {
            return Err(AppError::not_found("Recipient not found"));
        }

        if self.request_repo.are_friends(actor, target).await? {
            return Err(AppError::conflict(
                "You are already friends with this user",
            ));
        }

        if self.request_repo.exists_between(actor, target).await? {
            return Err(AppError::conflict(
                "A friend request already exists between you and this user",
            ));
        }

        let request = self.request_repo.create(actor, target).await?;

        info!(
            request_id = %request.id,
            sender_id = %actor,
            recipient_id = %target,
            "Friend request sent"
        );

        Ok(request)
    }

    /// Accepts a pending request addressed to the acting user.
    ///
    /// Only the recipient may accept. The status flip and both friend-set
    /// sides commit atomically in the store; a concurrent duplicate accept
    /// loses the status guard and surfaces as `Conflict`.
    pub async fn accept_request(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
    ) -> Result<FriendRequest, AppError> {
        let request = self
            .request_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Friend request not found"))?;

        if request.recipient_id != ctx.user_id() {
            return Err(AppError::forbidden(
                "You are not authorized to accept this request",
            ));
        }

        let accepted = self
            .request_repo
            .accept(request_id)
            .await?
            .ok_or_else(|| AppError::conflict("Friend request has already been accepted"))?;

        info!(
            request_id = %accepted.id,
            sender_id = %accepted.sender_id,
            recipient_id = %accepted.recipient_id,
            "Friend request accepted"
        );

        Ok(accepted)
    }

    /// The acting user's friends as profile summaries.
    pub async fn list_friends(&self, ctx: &RequestContext) -> Result<Vec<UserSummary>, AppError> {
        self.user_repo.friends_of(ctx.user_id()).await
    }

    /// Pending requests addressed to the acting user.
    pub async fn list_incoming(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<FriendRequestDetail>, AppError> {
        self.request_repo.pending_incoming(ctx.user_id()).await
    }

    /// Pending requests sent by the acting user.
    pub async fn list_outgoing(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<FriendRequestDetail>, AppError> {
        self.request_repo.pending_outgoing(ctx.user_id()).await
    }

    /// Onboarded users who could become language partners: everyone except
    /// the acting user and their existing friends. Pending requests do not
    /// remove anyone from this list.
    pub async fn recommendations(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<UserProfile>, AppError> {
        self.user_repo.recommendations_for(ctx.user_id()).await
    }
}
