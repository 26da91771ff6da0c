//! Deadline entity models and DTOs.

use lexora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `deadlines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deadline {
    pub id: DbId,
    pub case_id: DbId,
    pub title: String,
    pub due_at: Timestamp,
    pub is_met: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a deadline on a case.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDeadline {
    #[validate(length(min = 1))]
    pub title: String,
    pub due_at: Timestamp,
}

/// DTO for updating a deadline. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateDeadline {
    pub title: Option<String>,
    pub due_at: Option<Timestamp>,
    pub is_met: Option<bool>,
}
