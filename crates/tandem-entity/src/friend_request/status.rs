//! Friend-request status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a friend request.
///
/// There is no rejected or cancelled state: a pending request the recipient
/// never accepts simply stays pending, and an accepted request is a permanent
/// historical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "friend_request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    /// Sent, awaiting the recipient's acceptance.
    Pending,
    /// Accepted; the two users are friends.
    Accepted,
}

impl FriendRequestStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }

    /// Whether this request still awaits action.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for FriendRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FriendRequestStatus {
    type Err = tandem_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            _ => Err(tandem_core::AppError::validation(format!(
                "Invalid friend request status: '{s}'. Expected one of: pending, accepted"
            ))),
        }
    }
}
