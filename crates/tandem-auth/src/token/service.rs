//! Session token issuing and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use tandem_core::config::auth::AuthConfig;
use tandem_core::error::AppError;

use super::claims::SessionClaims;

/// Issues and verifies signed, time-bound session tokens.
///
/// Validity is purely cryptographic plus the expiry check; nothing is
/// persisted server-side.
#[derive(Clone)]
pub struct SessionTokenService {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Session validity window in days.
    ttl_days: i64,
}

impl std::fmt::Debug for SessionTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("ttl_days", &self.ttl_days)
            .finish()
    }
}

impl SessionTokenService {
    /// Creates a new token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl_days: config.session_ttl_days,
        }
    }

    /// The configured validity window, also used for the cookie max-age.
    pub fn ttl(&self) -> Duration {
        Duration::days(self.ttl_days)
    }

    /// Issues a signed session token for the given user.
    pub fn issue(&self, user_id: Uuid) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let expires_at = now + self.ttl();

        let claims = SessionClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok((token, expires_at))
    }

    /// Verifies a session token and returns the embedded user id.
    ///
    /// Malformed tokens, bad signatures, and expired tokens all collapse to
    /// `Unauthenticated`; the gate treats them identically.
    pub fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthenticated("Session has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthenticated("Invalid session token")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthenticated("Invalid session token signature")
                }
                _ => AppError::unauthenticated("Session token validation failed"),
            })?;

        Ok(token_data.claims.sub)
    }
}
