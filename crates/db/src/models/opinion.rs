//! Opinion (internal message) entity models and DTOs.

use lexora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `opinions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Opinion {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub case_id: Option<DbId>,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    pub deleted_by_sender: bool,
    pub deleted_by_receiver: bool,
    pub created_at: Timestamp,
}

impl From<Opinion> for lexora_core::threading::OpinionRecord {
    fn from(row: Opinion) -> Self {
        Self {
            id: row.id,
            parent_id: row.parent_id,
            sender_id: row.sender_id,
            receiver_id: row.receiver_id,
            case_id: row.case_id,
            subject: row.subject,
            is_read: row.is_read,
            created_at: row.created_at,
        }
    }
}

/// DTO for sending an opinion.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOpinion {
    pub parent_id: Option<DbId>,
    pub receiver_id: DbId,
    pub case_id: Option<DbId>,
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub body: String,
}
