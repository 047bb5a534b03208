//! Session authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and session cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token validity window in days.
    #[serde(default = "default_session_ttl_days")]
    pub session_ttl_days: i64,
    /// Name of the HTTP-only cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub session_cookie_name: String,
    /// Whether the session cookie is marked `Secure` (on in production).
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            session_ttl_days: default_session_ttl_days(),
            session_cookie_name: default_cookie_name(),
            cookie_secure: false,
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_session_ttl_days() -> i64 {
    7
}

fn default_cookie_name() -> String {
    "jwt".to_string()
}

fn default_password_min() -> usize {
    6
}
