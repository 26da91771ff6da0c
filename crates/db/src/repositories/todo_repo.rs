//! Repository for the `todos` table.

use lexora_core::types::DbId;
use sqlx::PgPool;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, user_id, case_id, title, is_done, due_on, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Create a todo for a user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTodo,
    ) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (user_id, case_id, title, due_on) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .bind(input.case_id)
            .bind(&input.title)
            .bind(input.due_on)
            .fetch_one(pool)
            .await
    }

    /// List a user's todos: open items first, then by due date.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos \
             WHERE user_id = $1 \
             ORDER BY is_done, due_on NULLS LAST, id"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a todo, scoped to its owner. Only non-`None` fields apply.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET \
                title = COALESCE($3, title), \
                is_done = COALESCE($4, is_done), \
                due_on = COALESCE($5, due_on), \
                updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.is_done)
            .bind(input.due_on)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo, scoped to its owner. Returns `true` if removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
