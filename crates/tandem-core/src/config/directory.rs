//! Chat/video directory provider configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external directory service that backs chat and video.
///
/// When disabled, user upserts are dropped and token requests fail with a
/// configuration error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Whether the directory integration is active.
    #[serde(default)]
    pub enabled: bool,
    /// API key identifying the application.
    #[serde(default)]
    pub api_key: String,
    /// API secret used to sign server and user tokens.
    #[serde(default)]
    pub api_secret: String,
    /// Base URL of the directory HTTP API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds for directory calls.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            api_secret: String::new(),
            base_url: default_base_url(),
            request_timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://chat.stream-io-api.com".to_string()
}

fn default_timeout() -> u64 {
    5
}
