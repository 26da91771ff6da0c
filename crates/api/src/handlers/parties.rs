//! Handlers for case parties (`/cases/{case_id}/parties`, `/parties/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lexora_core::error::CoreError;
use lexora_core::types::DbId;
use lexora_db::models::{CreateParty, Party, UpdateParty};
use lexora_db::repositories::PartyRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::cases::ensure_case_visible;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cases/{case_id}/parties
///
/// List a case's parties in storage order.
pub async fn list_parties(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Party>>>> {
    ensure_case_visible(&state, &auth, case_id).await?;
    let parties = PartyRepo::list_for_case(&state.pool, case_id).await?;
    Ok(Json(DataResponse { data: parties }))
}

/// POST /api/v1/cases/{case_id}/parties
///
/// Add a party to a case. Staff or admin only.
pub async fn create_party(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
    Json(input): Json<CreateParty>,
) -> AppResult<(StatusCode, Json<DataResponse<Party>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    ensure_case_visible(&state, &user, case_id).await?;

    let party = PartyRepo::create(&state.pool, case_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: party })))
}

/// PUT /api/v1/parties/{id}
///
/// Partially update a party. Staff or admin only.
pub async fn update_party(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
    Json(input): Json<UpdateParty>,
) -> AppResult<Json<DataResponse<Party>>> {
    let party = PartyRepo::update(&state.pool, party_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Party",
            id: party_id,
        }))?;

    Ok(Json(DataResponse { data: party }))
}

/// DELETE /api/v1/parties/{id}
///
/// Remove a party. Staff or admin only. Returns 204 No Content.
pub async fn delete_party(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(party_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PartyRepo::delete(&state.pool, party_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Party",
            id: party_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
