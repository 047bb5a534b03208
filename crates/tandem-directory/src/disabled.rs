//! Stub provider used when the directory integration is not configured.

use async_trait::async_trait;
use uuid::Uuid;

use tandem_core::error::AppError;

use crate::provider::{DirectoryProvider, DirectoryUser};

/// No-op directory for deployments without a chat provider.
///
/// Upserts are dropped silently so the primary request flow is unaffected;
/// token requests fail, since a token without a provider is meaningless.
#[derive(Debug, Clone, Copy)]
pub struct DisabledDirectory;

#[async_trait]
impl DirectoryProvider for DisabledDirectory {
    async fn upsert_user(&self, user: &DirectoryUser) -> Result<(), AppError> {
        tracing::debug!(user_id = %user.id, "Directory disabled, skipping upsert");
        Ok(())
    }

    fn issue_token(&self, _user_id: Uuid) -> Result<String, AppError> {
        Err(AppError::configuration(
            "Chat directory integration is not configured",
        ))
    }
}
