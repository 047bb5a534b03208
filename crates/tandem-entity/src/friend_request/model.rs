//! Friend-request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::FriendRequestStatus;

/// A friend request between two users.
///
/// Invariants enforced by the schema: `sender_id != recipient_id`, and at
/// most one record exists per unordered user pair regardless of direction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FriendRequest {
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
}

impl FriendRequest {
    /// Returns the other party relative to `user_id`.
    pub fn counterpart_of(&self, user_id: Uuid) -> Uuid {
        if self.sender_id == user_id {
            self.recipient_id
        } else {
            self.sender_id
        }
    }
}
