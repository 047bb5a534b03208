//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user with a language-exchange profile.
///
/// This is the full credential-store row. The password hash never leaves the
/// process: it is skipped on serialization, and request-scoped code works
/// with [`UserProfile`] instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address (unique, case-sensitive as stored).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Display name.
    pub full_name: String,
    /// Short self-description.
    pub bio: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// The language the user speaks natively.
    pub native_language: String,
    /// The language the user wants to practice.
    pub learning_language: String,
    /// Free-form location string.
    pub location: String,
    /// Whether the user has completed profile onboarding.
    pub is_onboarded: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The hash-free projection of this user.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            bio: self.bio.clone(),
            avatar_url: self.avatar_url.clone(),
            native_language: self.native_language.clone(),
            learning_language: self.learning_language.clone(),
            location: self.location.clone(),
            is_onboarded: self.is_onboarded,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A user row with the credential column excluded.
///
/// This is what the session gate loads and what handlers see; a `UserProfile`
/// can never leak a hash because it never contains one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Short self-description.
    pub bio: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// The language the user speaks natively.
    pub native_language: String,
    /// The language the user wants to practice.
    pub learning_language: String,
    /// Free-form location string.
    pub location: String,
    /// Whether the user has completed profile onboarding.
    pub is_onboarded: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The short profile attached to friend lists and request listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub full_name: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// The language the user speaks natively.
    pub native_language: String,
    /// The language the user wants to practice.
    pub learning_language: String,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name.
    pub full_name: String,
    /// Generated placeholder avatar URL.
    pub avatar_url: String,
}

/// The profile fields written when onboarding completes.
///
/// All fields are required to be non-empty; the workflow validates before
/// this struct is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingProfile {
    /// Display name.
    pub full_name: String,
    /// Short self-description.
    pub bio: String,
    /// The language the user speaks natively.
    pub native_language: String,
    /// The language the user wants to practice.
    pub learning_language: String,
    /// Free-form location string.
    pub location: String,
}
