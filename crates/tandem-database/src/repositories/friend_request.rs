//! Friend-request repository implementation (the relationship store).
//!
//! Owns `friend_requests` and the derived `friendships` pairs. The accept
//! path is the one multi-row write in the system and runs in a single
//! transaction.

use sqlx::PgPool;
use uuid::Uuid;

use tandem_core::error::{AppError, ErrorKind};
use tandem_core::result::AppResult;
use tandem_entity::friend_request::{FriendRequest, FriendRequestDetail};

/// Repository for friend requests and friendship pairs.
#[derive(Debug, Clone)]
pub struct FriendRequestRepository {
    pool: PgPool,
}

impl FriendRequestRepository {
    /// Create a new friend-request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a pending request from `sender` to `recipient`.
    ///
    /// The unordered-pair unique index rejects a duplicate in either
    /// direction, including the race where two opposite-direction requests
    /// are inserted concurrently; that violation maps to `Conflict`.
    pub async fn create(&self, sender: Uuid, recipient: Uuid) -> AppResult<FriendRequest> {
        sqlx::query_as::<_, FriendRequest>(
            "INSERT INTO friend_requests (sender_id, recipient_id) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(sender)
        .bind(recipient)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("friend_requests_pair_key") =>
            {
                AppError::conflict("A friend request already exists between you and this user")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create friend request", e),
        })
    }

    /// Find a request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FriendRequest>> {
        sqlx::query_as::<_, FriendRequest>("SELECT * FROM friend_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find friend request", e)
            })
    }

    /// Whether any request exists between the unordered pair, in either
    /// direction and at any status.
    pub async fn exists_between(&self, a: Uuid, b: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                 SELECT 1 FROM friend_requests \
                 WHERE LEAST(sender_id, recipient_id) = LEAST($1, $2) \
                   AND GREATEST(sender_id, recipient_id) = GREATEST($1, $2)\
             )",
        )
        .bind(a)
        .bind(b)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check request existence", e)
        })
    }

    /// Whether the unordered pair is already friends.
    pub async fn are_friends(&self, a: Uuid, b: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                 SELECT 1 FROM friendships \
                 WHERE user_lo = LEAST($1, $2) AND user_hi = GREATEST($1, $2)\
             )",
        )
        .bind(a)
        .bind(b)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check friendship", e))
    }

    /// Accept a pending request: flip its status and record the friendship,
    /// atomically.
    ///
    /// Returns `None` when the request is no longer pending, which is how a
    /// second concurrent accept observes that it lost the race: the status
    /// guard on the UPDATE serializes the two. The friendship insert is
    /// insert-if-absent, so a replay can never duplicate a pair.
    pub async fn accept(&self, id: Uuid) -> AppResult<Option<FriendRequest>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let updated = sqlx::query_as::<_, FriendRequest>(
            "UPDATE friend_requests SET status = 'accepted', updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' \
             RETURNING *",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to accept friend request", e)
        })?;

        if let Some(request) = &updated {
            sqlx::query(
                "INSERT INTO friendships (user_lo, user_hi) \
                 VALUES (LEAST($1, $2), GREATEST($1, $2)) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(request.sender_id)
            .bind(request.recipient_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to record friendship", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit acceptance", e)
        })?;

        Ok(updated)
    }

    /// Pending requests addressed to `user`, with the sender's summary.
    pub async fn pending_incoming(&self, user: Uuid) -> AppResult<Vec<FriendRequestDetail>> {
        sqlx::query_as::<_, FriendRequestDetail>(&detail_query("sender_id", "recipient_id"))
            .bind(user)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list incoming requests", e)
            })
    }

    /// Pending requests sent by `user`, with the recipient's summary.
    pub async fn pending_outgoing(&self, user: Uuid) -> AppResult<Vec<FriendRequestDetail>> {
        sqlx::query_as::<_, FriendRequestDetail>(&detail_query("recipient_id", "sender_id"))
            .bind(user)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list outgoing requests", e)
            })
    }
}

/// Builds the joined pending-request query. `counterpart` is the column the
/// user summary is joined on; `owner` is the column matched against the
/// caller.
fn detail_query(counterpart: &str, owner: &str) -> String {
    format!(
        "SELECT fr.id, fr.sender_id, fr.recipient_id, fr.status, fr.created_at, fr.updated_at, \
                u.id AS counterpart_id, \
                u.full_name AS counterpart_full_name, \
                u.avatar_url AS counterpart_avatar_url, \
                u.native_language AS counterpart_native_language, \
                u.learning_language AS counterpart_learning_language \
         FROM friend_requests fr \
         JOIN users u ON u.id = fr.{counterpart} \
         WHERE fr.{owner} = $1 AND fr.status = 'pending' \
         ORDER BY fr.created_at DESC"
    )
}
