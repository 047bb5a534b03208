//! Signup, login, and onboarding operations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::RngExt;
use tracing::{info, warn};
use uuid::Uuid;

use tandem_auth::password::{CredentialPolicy, PasswordHasher};
use tandem_auth::token::SessionTokenService;
use tandem_core::error::AppError;
use tandem_database::repositories::user::UserRepository;
use tandem_directory::{DirectoryProvider, DirectoryUser};
use tandem_entity::user::{CreateUser, OnboardingProfile, UserProfile};

/// Signup request fields as received from the client.
///
/// Fields are optional here so that absence surfaces as a workflow-level
/// validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Display name.
    pub full_name: Option<String>,
}

/// Login request fields as received from the client.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Onboarding request fields as received from the client.
#[derive(Debug, Clone, Default)]
pub struct OnboardingInput {
    /// Display name.
    pub full_name: Option<String>,
    /// Short self-description.
    pub bio: Option<String>,
    /// The language the user speaks natively.
    pub native_language: Option<String>,
    /// The language the user wants to practice.
    pub learning_language: Option<String>,
    /// Free-form location string.
    pub location: Option<String>,
}

/// The result of a successful signup or login: the user plus a fresh
/// session token for the cookie.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The authenticated user's profile.
    pub user: UserProfile,
    /// Signed session token.
    pub token: String,
    /// Token (and cookie) expiry.
    pub expires_at: DateTime<Utc>,
}

/// Handles signup, login, and onboarding.
#[derive(Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Credential policy.
    policy: CredentialPolicy,
    /// Session token service.
    tokens: Arc<SessionTokenService>,
    /// External chat directory.
    directory: Arc<dyn DirectoryProvider>,
    /// Hash verified when login hits an unknown email, so both failure
    /// paths do comparable work and return the same generic error.
    dummy_hash: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        policy: CredentialPolicy,
        tokens: Arc<SessionTokenService>,
        directory: Arc<dyn DirectoryProvider>,
    ) -> Result<Self, AppError> {
        let dummy_hash = hasher.hash_password("tandem-login-equalizer")?;
        Ok(Self {
            user_repo,
            hasher,
            policy,
            tokens,
            directory,
            dummy_hash,
        })
    }

    /// Registers a new user and opens a session.
    pub async fn register(&self, input: SignupInput) -> Result<AuthSession, AppError> {
        let (Some(email), Some(password), Some(full_name)) = (
            non_empty(input.email),
            non_empty(input.password),
            non_empty(input.full_name),
        ) else {
            return Err(AppError::validation("All fields are required"));
        };

        self.policy.validate_password(&password)?;
        self.policy.validate_email(&email)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(
                "Email already exists, please use a different one",
            ));
        }

        let password_hash = self.hasher.hash_password(&password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash,
                full_name,
                avatar_url: random_avatar_url(),
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        let profile = user.profile();
        self.sync_directory(&profile);

        let (token, expires_at) = self.tokens.issue(profile.id)?;
        Ok(AuthSession {
            user: profile,
            token,
            expires_at,
        })
    }

    /// Authenticates an email/password pair and opens a session.
    ///
    /// Unknown email and wrong password return the same generic failure.
    pub async fn authenticate(&self, input: LoginInput) -> Result<AuthSession, AppError> {
        let (Some(email), Some(password)) = (non_empty(input.email), non_empty(input.password))
        else {
            return Err(AppError::validation("All fields are required"));
        };

        let user = match self.user_repo.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                let _ = self.hasher.verify_password(&password, &self.dummy_hash);
                return Err(AppError::unauthenticated("Invalid email or password"));
            }
        };

        if !self.hasher.verify_password(&password, &user.password_hash)? {
            return Err(AppError::unauthenticated("Invalid email or password"));
        }

        info!(user_id = %user.id, "User logged in");

        let (token, expires_at) = self.tokens.issue(user.id)?;
        Ok(AuthSession {
            user: user.profile(),
            token,
            expires_at,
        })
    }

    /// Writes the full onboarding profile and marks the user onboarded.
    ///
    /// All five fields must be non-empty; the failure enumerates exactly
    /// which ones were missing.
    pub async fn complete_onboarding(
        &self,
        user_id: Uuid,
        input: OnboardingInput,
    ) -> Result<UserProfile, AppError> {
        let missing = missing_onboarding_fields(&input);
        if !missing.is_empty() {
            return Err(AppError::validation("All fields are required")
                .with_details(serde_json::json!({ "missingFields": missing })));
        }

        let profile = OnboardingProfile {
            full_name: input.full_name.unwrap_or_default(),
            bio: input.bio.unwrap_or_default(),
            native_language: input.native_language.unwrap_or_default(),
            learning_language: input.learning_language.unwrap_or_default(),
            location: input.location.unwrap_or_default(),
        };

        let updated = self
            .user_repo
            .complete_onboarding(user_id, &profile)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %updated.id, "Onboarding completed");

        self.sync_directory(&updated);

        Ok(updated)
    }

    /// Forwards the profile to the chat directory, fire-and-forget.
    ///
    /// Directory failures are logged and swallowed; they must never fail or
    /// delay the primary request.
    fn sync_directory(&self, profile: &UserProfile) {
        let directory = Arc::clone(&self.directory);
        let user = DirectoryUser {
            id: profile.id,
            name: profile.full_name.clone(),
            image: profile.avatar_url.clone(),
        };
        tokio::spawn(async move {
            if let Err(e) = directory.upsert_user(&user).await {
                warn!(user_id = %user.id, error = %e, "Directory sync failed");
            }
        });
    }
}

/// Returns the trimmed value when present and non-empty.
fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Field names (wire casing) missing from an onboarding submission.
fn missing_onboarding_fields(input: &OnboardingInput) -> Vec<&'static str> {
    let mut missing = Vec::new();
    let blank = |field: &Option<String>| field.as_deref().is_none_or(|v| v.trim().is_empty());

    if blank(&input.full_name) {
        missing.push("fullName");
    }
    if blank(&input.bio) {
        missing.push("bio");
    }
    if blank(&input.native_language) {
        missing.push("nativeLanguage");
    }
    if blank(&input.learning_language) {
        missing.push("learningLanguage");
    }
    if blank(&input.location) {
        missing.push("location");
    }
    missing
}

/// A placeholder avatar picked from the public set of 100.
fn random_avatar_url() -> String {
    let idx = rand::rng().random_range(1..=100);
    format!("https://avatar-placeholder.iran.liara.run/public/{idx}.png")
}
