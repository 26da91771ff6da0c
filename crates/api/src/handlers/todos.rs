//! Handlers for the personal `/todos` resource.
//!
//! Todos are private to their owner; every operation is scoped to the
//! authenticated user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lexora_core::error::CoreError;
use lexora_core::types::DbId;
use lexora_db::models::{CreateTodo, Todo, UpdateTodo};
use lexora_db::repositories::TodoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/todos
///
/// List the authenticated user's todos, open items first.
pub async fn list_todos(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Todo>>>> {
    let todos = TodoRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: todos }))
}

/// POST /api/v1/todos
///
/// Create a todo for the authenticated user.
pub async fn create_todo(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<DataResponse<Todo>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let todo = TodoRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: todo })))
}

/// PUT /api/v1/todos/{id}
///
/// Partially update an owned todo.
pub async fn update_todo(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<DataResponse<Todo>>> {
    let todo = TodoRepo::update(&state.pool, todo_id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Todo",
            id: todo_id,
        }))?;

    Ok(Json(DataResponse { data: todo }))
}

/// DELETE /api/v1/todos/{id}
///
/// Delete an owned todo. Returns 204 No Content.
pub async fn delete_todo(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TodoRepo::delete(&state.pool, todo_id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Todo",
            id: todo_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
