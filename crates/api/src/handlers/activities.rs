//! Handlers for recovery activities (`/cases/{case_id}/activities`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lexora_core::error::CoreError;
use lexora_core::types::DbId;
use lexora_db::models::{CreateRecoveryActivity, RecoveryActivity};
use lexora_db::repositories::RecoveryActivityRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::cases::ensure_case_visible;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cases/{case_id}/activities
///
/// List a case's recovery activities, newest first.
pub async fn list_activities(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<RecoveryActivity>>>> {
    ensure_case_visible(&state, &auth, case_id).await?;
    let activities = RecoveryActivityRepo::list_for_case(&state.pool, case_id).await?;
    Ok(Json(DataResponse { data: activities }))
}

/// POST /api/v1/cases/{case_id}/activities
///
/// Log a recovery activity on a case. Staff or admin only. Payment rows
/// (`activity_type = "payment"`) feed the recovered-amount derivation.
pub async fn create_activity(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
    Json(input): Json<CreateRecoveryActivity>,
) -> AppResult<(StatusCode, Json<DataResponse<RecoveryActivity>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if input.amount < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Amount must not be negative".into(),
        )));
    }

    ensure_case_visible(&state, &user, case_id).await?;

    let activity = RecoveryActivityRepo::create(&state.pool, case_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: activity })))
}
