//! User entity models and DTOs.

use lexora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
///
/// `password_hash` and `refresh_token_hash` are deliberately not
/// serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: String,
    pub role: String,
    pub organization_id: Option<DbId>,
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub refresh_token_hash: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user (admin only).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1))]
    pub display_name: String,
    pub role: String,
    pub organization_id: Option<DbId>,
}

/// DTO for updating a user. Only non-`None` fields are applied.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1))]
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub organization_id: Option<DbId>,
    pub is_active: Option<bool>,
}
