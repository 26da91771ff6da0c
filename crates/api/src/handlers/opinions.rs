//! Handlers for the `/opinions` resource (internal messages).
//!
//! Opinions have inbox/sent views with per-side soft deletion, and a thread
//! view reconstructed from parent references at read time.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lexora_core::error::CoreError;
use lexora_core::threading::{self, OpinionRecord, OpinionThread};
use lexora_core::types::DbId;
use lexora_db::models::{CreateOpinion, Opinion};
use lexora_db::repositories::{OpinionRepo, UserRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum page size for opinion listings.
const MAX_LIMIT: i64 = 100;

/// Default page size for opinion listings.
const DEFAULT_LIMIT: i64 = 50;

/// Subject used when a reply omits one.
const DEFAULT_SUBJECT: &str = "(no subject)";

/// GET /api/v1/opinions/inbox
///
/// List received opinions, newest first, excluding those the receiver
/// deleted.
pub async fn inbox(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Opinion>>>> {
    let limit = lexora_db::clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = lexora_db::clamp_offset(params.offset);

    let opinions = OpinionRepo::inbox(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: opinions }))
}

/// GET /api/v1/opinions/sent
///
/// List sent opinions, newest first, excluding those the sender deleted.
pub async fn sent(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Opinion>>>> {
    let limit = lexora_db::clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = lexora_db::clamp_offset(params.offset);

    let opinions = OpinionRepo::sent(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: opinions }))
}

/// GET /api/v1/opinions/{id}/thread
///
/// Reconstruct the thread around one opinion: walk up to the root, gather
/// descendants two levels deep, and group the result. Only a participant
/// (sender or receiver of the anchor opinion) may view the thread.
pub async fn thread(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(opinion_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<OpinionThread>>>> {
    let anchor = OpinionRepo::find_by_id(&state.pool, opinion_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Opinion",
            id: opinion_id,
        }))?;

    if anchor.sender_id != auth.user_id && anchor.receiver_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not a participant in this thread".into(),
        )));
    }

    let candidates = OpinionRepo::thread_candidates(&state.pool, opinion_id).await?;
    let records: Vec<OpinionRecord> = candidates.into_iter().map(Into::into).collect();

    Ok(Json(DataResponse {
        data: threading::build_threads(records),
    }))
}

/// POST /api/v1/opinions
///
/// Send an opinion. A `parent_id` makes it a reply; the subject defaults
/// from the parent when omitted.
pub async fn create_opinion(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateOpinion>,
) -> AppResult<(StatusCode, Json<DataResponse<Opinion>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    UserRepo::find_by_id(&state.pool, input.receiver_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.receiver_id,
        }))?;

    if let Some(parent_id) = input.parent_id {
        let parent = OpinionRepo::find_by_id(&state.pool, parent_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Opinion",
                id: parent_id,
            }))?;
        if input.subject.is_none() {
            input.subject = Some(format!("Re: {}", parent.subject));
        }
    }

    if input.subject.is_none() {
        input.subject = Some(DEFAULT_SUBJECT.to_string());
    }

    let opinion = OpinionRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: opinion })))
}

/// POST /api/v1/opinions/{id}/read
///
/// Mark a received opinion as read. Returns 204 No Content when flipped,
/// 404 when not found, not the receiver's, or already read.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(opinion_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let flipped = OpinionRepo::mark_read(&state.pool, opinion_id, auth.user_id).await?;
    if !flipped {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Opinion",
            id: opinion_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/opinions/{id}
///
/// Soft-delete an opinion for the calling side only. The other participant
/// keeps their copy. Returns 204 No Content.
pub async fn delete_opinion(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(opinion_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OpinionRepo::soft_delete_for_user(&state.pool, opinion_id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Opinion",
            id: opinion_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/opinions/unread-count
///
/// Number of unread opinions in the authenticated user's inbox.
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = OpinionRepo::unread_count(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({
        "data": { "count": count }
    })))
}
