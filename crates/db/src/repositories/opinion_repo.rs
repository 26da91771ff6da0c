//! Repository for the `opinions` table.

use lexora_core::types::DbId;
use sqlx::PgPool;

use crate::models::opinion::{CreateOpinion, Opinion};

/// Column list for `opinions` queries.
const COLUMNS: &str = "id, parent_id, sender_id, receiver_id, case_id, subject, body, \
     is_read, deleted_by_sender, deleted_by_receiver, created_at";

/// Provides operations for opinions (internal messages).
pub struct OpinionRepo;

impl OpinionRepo {
    /// Send an opinion, returning the created row.
    pub async fn create(
        pool: &PgPool,
        sender_id: DbId,
        input: &CreateOpinion,
    ) -> Result<Opinion, sqlx::Error> {
        let query = format!(
            "INSERT INTO opinions (parent_id, sender_id, receiver_id, case_id, subject, body) \
             VALUES ($1, $2, $3, $4, COALESCE($5, ''), $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Opinion>(&query)
            .bind(input.parent_id)
            .bind(sender_id)
            .bind(input.receiver_id)
            .bind(input.case_id)
            .bind(&input.subject)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find an opinion by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Opinion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM opinions WHERE id = $1");
        sqlx::query_as::<_, Opinion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List received opinions, newest first, honoring the receiver-side
    /// soft-delete flag.
    pub async fn inbox(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Opinion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM opinions \
             WHERE receiver_id = $1 AND deleted_by_receiver = false \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Opinion>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List sent opinions, newest first, honoring the sender-side
    /// soft-delete flag.
    pub async fn sent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Opinion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM opinions \
             WHERE sender_id = $1 AND deleted_by_sender = false \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Opinion>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Fetch the rows needed to reconstruct the thread around one opinion:
    /// the row itself, up to two ancestors, and up to two generations of
    /// replies below any of those.
    ///
    /// There is no stored thread id, so this walks `parent_id` references in
    /// both directions; membership is inferred, not guaranteed complete.
    pub async fn thread_candidates(pool: &PgPool, id: DbId) -> Result<Vec<Opinion>, sqlx::Error> {
        let Some(target) = Self::find_by_id(pool, id).await? else {
            return Ok(Vec::new());
        };

        let mut rows = vec![target];

        // Walk up: at most two ancestors.
        for _ in 0..2 {
            let parent_id = rows.last().and_then(|o| o.parent_id);
            match parent_id {
                Some(pid) => match Self::find_by_id(pool, pid).await? {
                    Some(parent) => rows.push(parent),
                    None => break,
                },
                None => break,
            }
        }

        // Walk down: two generations of replies below everything collected.
        for _ in 0..2 {
            let known: Vec<DbId> = rows.iter().map(|o| o.id).collect();
            let query = format!(
                "SELECT {COLUMNS} FROM opinions \
                 WHERE parent_id = ANY($1) AND NOT id = ANY($1) \
                 ORDER BY created_at"
            );
            let children = sqlx::query_as::<_, Opinion>(&query)
                .bind(&known)
                .fetch_all(pool)
                .await?;
            let before = rows.len();
            for child in children {
                if !rows.iter().any(|o| o.id == child.id) {
                    rows.push(child);
                }
            }
            if rows.len() == before {
                break;
            }
        }

        Ok(rows)
    }

    /// Mark an opinion as read, scoped to its receiver.
    ///
    /// Returns `true` if an unread row was updated.
    pub async fn mark_read(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE opinions SET is_read = true \
             WHERE id = $1 AND receiver_id = $2 AND is_read = false",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete an opinion for whichever side the user is on.
    ///
    /// Returns `true` if the user was a party to the opinion and a flag was
    /// set. The row itself is never removed.
    pub async fn soft_delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE opinions SET \
                deleted_by_sender = deleted_by_sender OR (sender_id = $2), \
                deleted_by_receiver = deleted_by_receiver OR (receiver_id = $2) \
             WHERE id = $1 AND (sender_id = $2 OR receiver_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of unread received opinions for a user.
    pub async fn unread_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM opinions \
             WHERE receiver_id = $1 AND is_read = false AND deleted_by_receiver = false",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
