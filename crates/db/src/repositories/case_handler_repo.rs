//! Repository for the `case_handlers` join table.

use lexora_core::types::DbId;
use sqlx::PgPool;

use crate::models::case_handler::CaseHandler;

/// Column list for `case_handlers` queries.
const COLUMNS: &str = "id, case_id, user_id, role_label, created_at";

/// Provides assignment operations for case handlers.
pub struct CaseHandlerRepo;

impl CaseHandlerRepo {
    /// Assign a user to a case, returning the created row.
    pub async fn create(
        pool: &PgPool,
        case_id: DbId,
        user_id: DbId,
        role_label: &str,
    ) -> Result<CaseHandler, sqlx::Error> {
        let query = format!(
            "INSERT INTO case_handlers (case_id, user_id, role_label) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CaseHandler>(&query)
            .bind(case_id)
            .bind(user_id)
            .bind(role_label)
            .fetch_one(pool)
            .await
    }

    /// List assignments for one case.
    pub async fn list_for_case(
        pool: &PgPool,
        case_id: DbId,
    ) -> Result<Vec<CaseHandler>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM case_handlers WHERE case_id = $1 ORDER BY id");
        sqlx::query_as::<_, CaseHandler>(&query)
            .bind(case_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch all assignments for one id batch of cases.
    pub async fn list_for_cases(
        pool: &PgPool,
        case_ids: &[DbId],
    ) -> Result<Vec<CaseHandler>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM case_handlers WHERE case_id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, CaseHandler>(&query)
            .bind(case_ids)
            .fetch_all(pool)
            .await
    }

    /// Remove every assignment on a case. Returns the number removed.
    ///
    /// Part of the assignment-replacement sequence (delete, then insert the
    /// new set); the sequence is intentionally not transactional.
    pub async fn delete_for_case(pool: &PgPool, case_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM case_handlers WHERE case_id = $1")
            .bind(case_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
