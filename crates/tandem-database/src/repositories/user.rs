//! User repository implementation (the credential store).

use sqlx::PgPool;
use uuid::Uuid;

use tandem_core::error::{AppError, ErrorKind};
use tandem_core::result::AppResult;
use tandem_entity::user::{CreateUser, OnboardingProfile, User, UserProfile, UserSummary};

/// Columns selected wherever a hash-free [`UserProfile`] is loaded.
const PROFILE_COLUMNS: &str = "id, email, full_name, bio, avatar_url, native_language, \
     learning_language, location, is_onboarded, created_at, updated_at";

/// Repository for user persistence and profile queries.
///
/// This is the only type that touches the `password_hash` column.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user.
    ///
    /// The email uniqueness index is the authority here; a duplicate maps to
    /// `Conflict` even if two signups race past any pre-check.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, full_name, avatar_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.full_name)
        .bind(&data.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already exists, please use a different one")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Find a user by primary key, credential hash included.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email, exact match (email is case-sensitive as stored).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Load the hash-free profile projection for the session gate.
    pub async fn find_profile(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load user profile", e))
    }

    /// Whether a user with the given id exists.
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check user existence", e)
            })
    }

    /// Write the onboarding profile fields and mark the user onboarded.
    pub async fn complete_onboarding(
        &self,
        id: Uuid,
        profile: &OnboardingProfile,
    ) -> AppResult<Option<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(&format!(
            "UPDATE users SET full_name = $2, bio = $3, native_language = $4, \
                              learning_language = $5, location = $6, \
                              is_onboarded = TRUE, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(id)
        .bind(&profile.full_name)
        .bind(&profile.bio)
        .bind(&profile.native_language)
        .bind(&profile.learning_language)
        .bind(&profile.location)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to complete onboarding", e))
    }

    /// List the given user's friends as profile summaries.
    ///
    /// One friendship row serves both directions, so the counterpart is
    /// whichever side of the pair is not the caller.
    pub async fn friends_of(&self, id: Uuid) -> AppResult<Vec<UserSummary>> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.full_name, u.avatar_url, u.native_language, u.learning_language \
             FROM friendships f \
             JOIN users u ON u.id = CASE WHEN f.user_lo = $1 THEN f.user_hi ELSE f.user_lo END \
             WHERE f.user_lo = $1 OR f.user_hi = $1 \
             ORDER BY f.created_at ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list friends", e))
    }

    /// List onboarded users who are neither the caller nor already friends
    /// with the caller. Pending requests do not filter anyone out.
    pub async fn recommendations_for(&self, id: Uuid) -> AppResult<Vec<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM users u \
             WHERE u.id <> $1 \
               AND u.is_onboarded \
               AND NOT EXISTS (\
                   SELECT 1 FROM friendships f \
                   WHERE f.user_lo = LEAST(u.id, $1) AND f.user_hi = GREATEST(u.id, $1)\
               ) \
             ORDER BY u.created_at DESC"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recommendations", e)
        })
    }
}
