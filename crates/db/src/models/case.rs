//! Case entity models and DTOs.

use lexora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `cases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Case {
    pub id: DbId,
    pub case_number: String,
    pub principal_amount: f64,
    pub status_code: i32,
    pub category: String,
    pub organization_id: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Case> for lexora_core::aggregate::CaseRecord {
    fn from(row: Case) -> Self {
        Self {
            id: row.id,
            case_number: row.case_number,
            principal_amount: row.principal_amount,
            status_code: row.status_code,
            category: row.category,
            created_at: row.created_at,
        }
    }
}

/// DTO for creating a case.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCase {
    #[validate(length(min = 1))]
    pub case_number: String,
    pub principal_amount: f64,
    pub status_code: Option<i32>,
    pub category: Option<String>,
    pub organization_id: Option<DbId>,
}

/// DTO for updating a case. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateCase {
    pub principal_amount: Option<f64>,
    pub status_code: Option<i32>,
    pub category: Option<String>,
    pub organization_id: Option<DbId>,
}
