//! Repository for the `deadlines` table.

use lexora_core::types::DbId;
use sqlx::PgPool;

use crate::models::deadline::{CreateDeadline, Deadline, UpdateDeadline};

/// Column list for `deadlines` queries.
const COLUMNS: &str = "id, case_id, title, due_at, is_met, created_at, updated_at";

/// Provides CRUD operations for case deadlines.
pub struct DeadlineRepo;

impl DeadlineRepo {
    /// Create a deadline on a case, returning the created row.
    pub async fn create(
        pool: &PgPool,
        case_id: DbId,
        input: &CreateDeadline,
    ) -> Result<Deadline, sqlx::Error> {
        let query = format!(
            "INSERT INTO deadlines (case_id, title, due_at) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deadline>(&query)
            .bind(case_id)
            .bind(&input.title)
            .bind(input.due_at)
            .fetch_one(pool)
            .await
    }

    /// List deadlines for one case, soonest first.
    pub async fn list_for_case(
        pool: &PgPool,
        case_id: DbId,
    ) -> Result<Vec<Deadline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deadlines WHERE case_id = $1 ORDER BY due_at");
        sqlx::query_as::<_, Deadline>(&query)
            .bind(case_id)
            .fetch_all(pool)
            .await
    }

    /// Update a deadline. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDeadline,
    ) -> Result<Option<Deadline>, sqlx::Error> {
        let query = format!(
            "UPDATE deadlines SET \
                title = COALESCE($2, title), \
                due_at = COALESCE($3, due_at), \
                is_met = COALESCE($4, is_met), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deadline>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.due_at)
            .bind(input.is_met)
            .fetch_optional(pool)
            .await
    }
}
