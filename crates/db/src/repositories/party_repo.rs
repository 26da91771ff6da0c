//! Repository for the `parties` table.

use lexora_core::types::DbId;
use sqlx::PgPool;

use crate::models::party::{CreateParty, Party, UpdateParty};

/// Column list for `parties` queries.
const COLUMNS: &str =
    "id, case_id, party_type, entity_kind, person_name, company_name, created_at";

/// Provides CRUD operations for case parties.
pub struct PartyRepo;

impl PartyRepo {
    /// Insert a party on a case, returning the created row.
    pub async fn create(
        pool: &PgPool,
        case_id: DbId,
        input: &CreateParty,
    ) -> Result<Party, sqlx::Error> {
        let query = format!(
            "INSERT INTO parties (case_id, party_type, entity_kind, person_name, company_name) \
             VALUES ($1, $2, COALESCE($3, 'individual'), $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Party>(&query)
            .bind(case_id)
            .bind(&input.party_type)
            .bind(&input.entity_kind)
            .bind(&input.person_name)
            .bind(&input.company_name)
            .fetch_one(pool)
            .await
    }

    /// Find a party by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Party>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parties WHERE id = $1");
        sqlx::query_as::<_, Party>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List parties for one case in storage order.
    pub async fn list_for_case(pool: &PgPool, case_id: DbId) -> Result<Vec<Party>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parties WHERE case_id = $1 ORDER BY id");
        sqlx::query_as::<_, Party>(&query)
            .bind(case_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch all parties for one id batch of cases.
    pub async fn list_for_cases(pool: &PgPool, case_ids: &[DbId]) -> Result<Vec<Party>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parties WHERE case_id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Party>(&query)
            .bind(case_ids)
            .fetch_all(pool)
            .await
    }

    /// Update a party. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateParty,
    ) -> Result<Option<Party>, sqlx::Error> {
        let query = format!(
            "UPDATE parties SET \
                party_type = COALESCE($2, party_type), \
                entity_kind = COALESCE($3, entity_kind), \
                person_name = COALESCE($4, person_name), \
                company_name = COALESCE($5, company_name) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Party>(&query)
            .bind(id)
            .bind(&input.party_type)
            .bind(&input.entity_kind)
            .bind(&input.person_name)
            .bind(&input.company_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a party. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM parties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
