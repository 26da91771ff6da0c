//! Recovery-activity entity models and DTOs.

use lexora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `recovery_activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecoveryActivity {
    pub id: DbId,
    pub case_id: DbId,
    pub activity_type: String,
    pub amount: f64,
    pub occurred_at: Timestamp,
    pub created_at: Timestamp,
}

impl From<RecoveryActivity> for lexora_core::finance::ActivityRecord {
    fn from(row: RecoveryActivity) -> Self {
        Self {
            id: row.id,
            case_id: row.case_id,
            activity_type: row.activity_type,
            amount: row.amount,
        }
    }
}

/// DTO for logging a recovery activity on a case.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecoveryActivity {
    #[validate(length(min = 1))]
    pub activity_type: String,
    pub amount: f64,
    pub occurred_at: Option<Timestamp>,
}
