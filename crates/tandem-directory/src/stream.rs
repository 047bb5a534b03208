//! Stream-compatible directory client.
//!
//! Talks to a Stream-style chat API: server-to-server calls authenticate
//! with a JWT signed by the API secret carrying a `server` claim, and user
//! tokens are JWTs carrying the user id.

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

use tandem_core::config::directory::DirectoryConfig;
use tandem_core::error::AppError;

use crate::provider::{DirectoryProvider, DirectoryUser};

/// HTTP client for a Stream-compatible chat directory.
#[derive(Clone)]
pub struct StreamDirectory {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    signing_key: EncodingKey,
}

#[derive(Serialize)]
struct ServerClaims {
    server: bool,
}

#[derive(Serialize)]
struct UserClaims {
    user_id: String,
}

impl std::fmt::Debug for StreamDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamDirectory")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl StreamDirectory {
    /// Creates a new client from directory configuration.
    pub fn new(config: &DirectoryConfig) -> Result<Self, AppError> {
        if config.api_key.is_empty() || config.api_secret.is_empty() {
            return Err(AppError::configuration(
                "Directory API key or secret is missing",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build directory HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            signing_key: EncodingKey::from_secret(config.api_secret.as_bytes()),
        })
    }

    /// Signs the server-side JWT used to authenticate API calls.
    fn server_token(&self) -> Result<String, AppError> {
        encode(
            &Header::default(),
            &ServerClaims { server: true },
            &self.signing_key,
        )
        .map_err(|e| AppError::internal(format!("Failed to sign server token: {e}")))
    }
}

#[async_trait]
impl DirectoryProvider for StreamDirectory {
    async fn upsert_user(&self, user: &DirectoryUser) -> Result<(), AppError> {
        let url = format!("{}/users?api_key={}", self.base_url, self.api_key);

        // The API keys the upsert map by user id.
        let mut users = serde_json::Map::new();
        users.insert(
            user.id.to_string(),
            serde_json::json!({
                "id": user.id.to_string(),
                "name": user.name,
                "image": user.image,
            }),
        );
        let body = serde_json::json!({ "users": users });

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.server_token()?)
            .header("stream-auth-type", "jwt")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("Directory upsert request failed: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Directory upsert returned {}",
                response.status()
            )));
        }

        tracing::debug!(user_id = %user.id, "Directory user upserted");
        Ok(())
    }

    fn issue_token(&self, user_id: Uuid) -> Result<String, AppError> {
        encode(
            &Header::default(),
            &UserClaims {
                user_id: user_id.to_string(),
            },
            &self.signing_key,
        )
        .map_err(|e| AppError::internal(format!("Failed to sign user token: {e}")))
    }
}
