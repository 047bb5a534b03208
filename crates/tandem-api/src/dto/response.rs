//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tandem_entity::friend_request::{FriendRequest, FriendRequestDetail, FriendRequestStatus};
use tandem_entity::user::{UserProfile, UserSummary};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Full user profile for responses. Never carries a credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Short self-description.
    pub bio: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Native language.
    pub native_language: String,
    /// Learning language.
    pub learning_language: String,
    /// Location.
    pub location: String,
    /// Whether onboarding is complete.
    pub is_onboarded: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for UserResponse {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            native_language: user.native_language,
            learning_language: user.learning_language,
            location: user.location,
            is_onboarded: user.is_onboarded,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Short profile attached to friend lists and request listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub full_name: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Native language.
    pub native_language: String,
    /// Learning language.
    pub learning_language: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            avatar_url: user.avatar_url,
            native_language: user.native_language,
            learning_language: user.learning_language,
        }
    }
}

/// A friend-request record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestResponse {
    /// Request ID.
    pub id: Uuid,
    /// Sender user ID.
    pub sender_id: Uuid,
    /// Recipient user ID.
    pub recipient_id: Uuid,
    /// Current status.
    pub status: FriendRequestStatus,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<FriendRequest> for FriendRequestResponse {
    fn from(request: FriendRequest) -> Self {
        Self {
            id: request.id,
            sender_id: request.sender_id,
            recipient_id: request.recipient_id,
            status: request.status,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

/// A pending request in the recipient's incoming list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingRequestResponse {
    /// Request ID.
    pub id: Uuid,
    /// Current status.
    pub status: FriendRequestStatus,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// The sender's profile summary.
    pub sender: UserSummaryResponse,
}

impl From<FriendRequestDetail> for IncomingRequestResponse {
    fn from(detail: FriendRequestDetail) -> Self {
        let sender = detail.counterpart().into();
        Self {
            id: detail.id,
            status: detail.status,
            created_at: detail.created_at,
            sender,
        }
    }
}

/// A pending request in the sender's outgoing list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingRequestResponse {
    /// Request ID.
    pub id: Uuid,
    /// Current status.
    pub status: FriendRequestStatus,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// The recipient's profile summary.
    pub recipient: UserSummaryResponse,
}

impl From<FriendRequestDetail> for OutgoingRequestResponse {
    fn from(detail: FriendRequestDetail) -> Self {
        let recipient = detail.counterpart().into();
        Self {
            id: detail.id,
            status: detail.status,
            created_at: detail.created_at,
            recipient,
        }
    }
}

/// Both pending request lists for the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRequestsResponse {
    /// Requests addressed to the current user.
    pub incoming: Vec<IncomingRequestResponse>,
    /// Requests sent by the current user.
    pub outgoing: Vec<OutgoingRequestResponse>,
}

/// Chat directory token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTokenResponse {
    /// Provider user token.
    pub token: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
