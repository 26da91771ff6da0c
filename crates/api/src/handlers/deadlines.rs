//! Handlers for case deadlines (`/cases/{case_id}/deadlines`,
//! `/deadlines/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lexora_core::error::CoreError;
use lexora_core::types::DbId;
use lexora_db::models::{CreateDeadline, Deadline, UpdateDeadline};
use lexora_db::repositories::DeadlineRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::cases::ensure_case_visible;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cases/{case_id}/deadlines
///
/// List a case's deadlines, soonest first.
pub async fn list_deadlines(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Deadline>>>> {
    ensure_case_visible(&state, &auth, case_id).await?;
    let deadlines = DeadlineRepo::list_for_case(&state.pool, case_id).await?;
    Ok(Json(DataResponse { data: deadlines }))
}

/// POST /api/v1/cases/{case_id}/deadlines
///
/// Add a deadline to a case. Staff or admin only.
pub async fn create_deadline(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
    Json(input): Json<CreateDeadline>,
) -> AppResult<(StatusCode, Json<DataResponse<Deadline>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    ensure_case_visible(&state, &user, case_id).await?;

    let deadline = DeadlineRepo::create(&state.pool, case_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: deadline })))
}

/// PUT /api/v1/deadlines/{id}
///
/// Partially update a deadline (typically to mark it met). Staff or admin
/// only.
pub async fn update_deadline(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(deadline_id): Path<DbId>,
    Json(input): Json<UpdateDeadline>,
) -> AppResult<Json<DataResponse<Deadline>>> {
    let deadline = DeadlineRepo::update(&state.pool, deadline_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Deadline",
            id: deadline_id,
        }))?;

    Ok(Json(DataResponse { data: deadline }))
}
