//! Repository for the `recovery_activities` table.

use lexora_core::finance::ACTIVITY_PAYMENT;
use lexora_core::types::DbId;
use sqlx::PgPool;

use crate::models::recovery_activity::{CreateRecoveryActivity, RecoveryActivity};

/// Column list for `recovery_activities` queries.
const COLUMNS: &str = "id, case_id, activity_type, amount, occurred_at, created_at";

/// Provides operations for recovery activities.
pub struct RecoveryActivityRepo;

impl RecoveryActivityRepo {
    /// Log an activity on a case, returning the created row.
    pub async fn create(
        pool: &PgPool,
        case_id: DbId,
        input: &CreateRecoveryActivity,
    ) -> Result<RecoveryActivity, sqlx::Error> {
        let query = format!(
            "INSERT INTO recovery_activities (case_id, activity_type, amount, occurred_at) \
             VALUES ($1, $2, $3, COALESCE($4, NOW())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecoveryActivity>(&query)
            .bind(case_id)
            .bind(&input.activity_type)
            .bind(input.amount)
            .bind(input.occurred_at)
            .fetch_one(pool)
            .await
    }

    /// List all activities for one case, most recent first.
    pub async fn list_for_case(
        pool: &PgPool,
        case_id: DbId,
    ) -> Result<Vec<RecoveryActivity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM recovery_activities \
             WHERE case_id = $1 \
             ORDER BY occurred_at DESC"
        );
        sqlx::query_as::<_, RecoveryActivity>(&query)
            .bind(case_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch payment-typed activities for one id batch of cases.
    ///
    /// Only payments contribute to recovered-amount aggregation, so the
    /// aggregator never fetches the other activity types.
    pub async fn list_payments_for_cases(
        pool: &PgPool,
        case_ids: &[DbId],
    ) -> Result<Vec<RecoveryActivity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM recovery_activities \
             WHERE case_id = ANY($1) AND activity_type = $2 \
             ORDER BY occurred_at DESC"
        );
        sqlx::query_as::<_, RecoveryActivity>(&query)
            .bind(case_ids)
            .bind(ACTIVITY_PAYMENT)
            .fetch_all(pool)
            .await
    }
}
