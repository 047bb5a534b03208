//! Directory provider trait and the user record it syncs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tandem_core::error::AppError;

/// The slice of a user's profile forwarded to the chat directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// User id, stringified on the wire.
    pub id: Uuid,
    /// Display name shown in chat.
    pub name: String,
    /// Avatar URL shown in chat.
    pub image: String,
}

/// External chat/video directory service.
///
/// Implementations must be safe to call fire-and-forget: `upsert_user`
/// failures are the caller's to log and swallow, never to escalate.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// Create or update the user's record in the provider's directory.
    async fn upsert_user(&self, user: &DirectoryUser) -> Result<(), AppError>;

    /// Mint a token granting the given user access to the chat service.
    fn issue_token(&self, user_id: Uuid) -> Result<String, AppError>;
}
