//! Todo entity models and DTOs.

use lexora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub user_id: DbId,
    pub case_id: Option<DbId>,
    pub title: String,
    pub is_done: bool,
    pub due_on: Option<chrono::NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a todo.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodo {
    pub case_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub title: String,
    pub due_on: Option<chrono::NaiveDate>,
}

/// DTO for updating a todo. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub is_done: Option<bool>,
    pub due_on: Option<chrono::NaiveDate>,
}
