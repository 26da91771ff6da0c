//! Repository for the `cases` table.

use lexora_core::types::DbId;
use sqlx::PgPool;

use crate::models::case::{Case, CreateCase, UpdateCase};

/// Column list for `cases` queries.
const COLUMNS: &str = "id, case_number, principal_amount, status_code, category, \
     organization_id, deleted_at, created_at, updated_at";

/// Provides CRUD and id-scoping operations for cases.
pub struct CaseRepo;

impl CaseRepo {
    /// Insert a new case, returning the created row.
    ///
    /// `status_code` defaults to 10 (Intake) when absent.
    pub async fn create(pool: &PgPool, input: &CreateCase) -> Result<Case, sqlx::Error> {
        let query = format!(
            "INSERT INTO cases (case_number, principal_amount, status_code, category, organization_id) \
             VALUES ($1, $2, COALESCE($3, 10), COALESCE($4, 'debt_recovery'), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(&input.case_number)
            .bind(input.principal_amount)
            .bind(input.status_code)
            .bind(&input.category)
            .bind(input.organization_id)
            .fetch_one(pool)
            .await
    }

    /// Find a case by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Case>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cases WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Case>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one id batch of cases, newest first.
    ///
    /// Callers split id sets into batches of at most
    /// [`lexora_core::aggregate::BATCH_SIZE`]; ordering is only guaranteed
    /// within a batch.
    pub async fn list_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cases \
             WHERE id = ANY($1) AND deleted_at IS NULL \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Ids of cases the given user handles, newest case first.
    pub async fn ids_for_handler(pool: &PgPool, user_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT c.id FROM cases c \
             JOIN case_handlers h ON h.case_id = c.id \
             WHERE h.user_id = $1 AND c.deleted_at IS NULL \
             ORDER BY c.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Ids of cases belonging to an organization, newest first.
    pub async fn ids_for_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id FROM cases \
             WHERE organization_id = $1 AND deleted_at IS NULL \
             ORDER BY created_at DESC",
        )
        .bind(organization_id)
        .fetch_all(pool)
        .await
    }

    /// Ids of all live cases, newest first. Admin scope.
    pub async fn ids_all(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id FROM cases WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a case. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCase,
    ) -> Result<Option<Case>, sqlx::Error> {
        let query = format!(
            "UPDATE cases SET \
                principal_amount = COALESCE($2, principal_amount), \
                status_code = COALESCE($3, status_code), \
                category = COALESCE($4, category), \
                organization_id = COALESCE($5, organization_id), \
                updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(id)
            .bind(input.principal_amount)
            .bind(input.status_code)
            .bind(&input.category)
            .bind(input.organization_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a case by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cases SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
