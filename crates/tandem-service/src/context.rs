//! Request context carrying the gate-verified user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tandem_entity::user::UserProfile;

/// Context for the current authenticated request.
///
/// Produced only by the session gate and passed into service methods so
/// that every operation knows *who* is acting. Carries the hash-free
/// profile the gate already loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's profile.
    pub user: UserProfile,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: UserProfile) -> Self {
        Self {
            user,
            request_time: Utc::now(),
        }
    }

    /// The acting user's id.
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}
