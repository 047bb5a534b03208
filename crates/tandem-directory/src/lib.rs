//! # tandem-directory
//!
//! Client for the external chat/video directory service. The rest of the
//! system only sees the [`DirectoryProvider`] trait: an upsert that keeps the
//! provider's user directory in sync, and a token mint that grants a user
//! access to chat.
//!
//! Chat transport itself lives entirely in the provider; nothing here speaks
//! the chat protocol.

pub mod disabled;
pub mod provider;
pub mod stream;

use std::sync::Arc;

use tandem_core::config::directory::DirectoryConfig;
use tandem_core::error::AppError;

pub use disabled::DisabledDirectory;
pub use provider::{DirectoryProvider, DirectoryUser};
pub use stream::StreamDirectory;

/// Builds the configured directory provider.
///
/// Returns the HTTP-backed provider when enabled, or the disabled stub
/// otherwise, so callers never branch on configuration themselves.
pub fn build_provider(config: &DirectoryConfig) -> Result<Arc<dyn DirectoryProvider>, AppError> {
    if config.enabled {
        Ok(Arc::new(StreamDirectory::new(config)?))
    } else {
        tracing::info!("Chat directory integration disabled");
        Ok(Arc::new(DisabledDirectory))
    }
}
