//! Handlers for case handler assignments (`/cases/{case_id}/handlers`).

use axum::extract::{Path, State};
use axum::Json;
use lexora_core::error::CoreError;
use lexora_core::types::DbId;
use lexora_db::models::{AssignHandler, CaseHandler};
use lexora_db::repositories::{CaseHandlerRepo, CaseRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default role label for assignments that do not specify one.
const DEFAULT_ROLE_LABEL: &str = "handler";

/// GET /api/v1/cases/{case_id}/handlers
///
/// List a case's handler assignments.
pub async fn list_handlers(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<CaseHandler>>>> {
    crate::handlers::cases::ensure_case_visible(&state, &auth, case_id).await?;
    let handlers = CaseHandlerRepo::list_for_case(&state.pool, case_id).await?;
    Ok(Json(DataResponse { data: handlers }))
}

/// PUT /api/v1/cases/{case_id}/handlers
///
/// Replace a case's handler assignments with the given set. Staff or admin
/// only.
///
/// The replacement is a delete followed by sequential inserts, not a single
/// transaction. A failure partway through leaves the assignments partially
/// replaced and surfaces as a 500; re-submitting the request repairs the
/// state.
pub async fn replace_handlers(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
    Json(input): Json<Vec<AssignHandler>>,
) -> AppResult<Json<DataResponse<Vec<CaseHandler>>>> {
    CaseRepo::find_by_id(&state.pool, case_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Case",
            id: case_id,
        }))?;

    CaseHandlerRepo::delete_for_case(&state.pool, case_id).await?;

    let mut created = Vec::with_capacity(input.len());
    for assignment in &input {
        let role_label = assignment
            .role_label
            .as_deref()
            .unwrap_or(DEFAULT_ROLE_LABEL);
        let handler =
            CaseHandlerRepo::create(&state.pool, case_id, assignment.user_id, role_label).await?;
        created.push(handler);
    }

    Ok(Json(DataResponse { data: created }))
}
