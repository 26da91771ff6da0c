//! Case-handler assignment models and DTOs.

use lexora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `case_handlers` join table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CaseHandler {
    pub id: DbId,
    pub case_id: DbId,
    pub user_id: DbId,
    pub role_label: String,
    pub created_at: Timestamp,
}

impl From<CaseHandler> for lexora_core::aggregate::HandlerRecord {
    fn from(row: CaseHandler) -> Self {
        Self {
            case_id: row.case_id,
            user_id: row.user_id,
            role_label: row.role_label,
        }
    }
}

/// One entry in a handler-assignment replacement request.
#[derive(Debug, Deserialize)]
pub struct AssignHandler {
    pub user_id: DbId,
    pub role_label: Option<String>,
}
