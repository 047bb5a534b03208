//! Joined friend-request views for listing endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::FriendRequestStatus;
use crate::user::UserSummary;

/// A friend request joined with the counterpart's profile summary.
///
/// For incoming listings the counterpart is the sender; for outgoing
/// listings it is the recipient. Flat row shape so it can be selected with
/// aliased columns in one query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FriendRequestDetail {
    /// Unique request identifier.
    pub id: Uuid,
    /// The user who sent the request.
    pub sender_id: Uuid,
    /// The user who can accept it.
    pub recipient_id: Uuid,
    /// Current lifecycle state.
    pub status: FriendRequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
    /// Counterpart's user id.
    pub counterpart_id: Uuid,
    /// Counterpart's display name.
    pub counterpart_full_name: String,
    /// Counterpart's avatar URL.
    pub counterpart_avatar_url: String,
    /// Counterpart's native language.
    pub counterpart_native_language: String,
    /// Counterpart's learning language.
    pub counterpart_learning_language: String,
}

impl FriendRequestDetail {
    /// Extracts the counterpart columns as a [`UserSummary`].
    pub fn counterpart(&self) -> UserSummary {
        UserSummary {
            id: self.counterpart_id,
            full_name: self.counterpart_full_name.clone(),
            avatar_url: self.counterpart_avatar_url.clone(),
            native_language: self.counterpart_native_language.clone(),
            learning_language: self.counterpart_learning_language.clone(),
        }
    }
}
