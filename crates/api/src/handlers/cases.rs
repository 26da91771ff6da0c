//! Handlers for the `/cases` resource.
//!
//! Listing runs the full aggregation pipeline: resolve the visible id set
//! for the requested scope, fetch and enrich in batches, then filter and
//! paginate the enriched set in memory.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lexora_core::aggregate::{self, EnrichedCase};
use lexora_core::error::CoreError;
use lexora_core::paging::{PageState, DEFAULT_PAGE_SIZE};
use lexora_core::roles::is_staff_or_admin;
use lexora_core::types::DbId;
use lexora_db::models::{Case, CreateCase, UpdateCase};
use lexora_db::repositories::{CaseRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::aggregator;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /cases`.
#[derive(Debug, Deserialize)]
pub struct CaseListQuery {
    /// Visibility scope: `mine` (default), `organization`, or `all`.
    pub scope: Option<String>,
    /// Search term matched against creditor name, debtor name, and case
    /// number. Must be at least 2 characters.
    pub search: Option<String>,
    /// Status filter tag (`open`, `recovery`, `legal`, `closed`).
    pub status: Option<String>,
    /// 1-based page number. Defaults to 1.
    pub page: Option<usize>,
    /// Page size. Defaults to 10.
    pub page_size: Option<usize>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/cases
///
/// List the cases visible to the authenticated user, enriched with party
/// names, handler assignments, status display info, and derived finance
/// figures. Supports search, status filtering, and pagination.
pub async fn list_cases(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CaseListQuery>,
) -> AppResult<Json<PageResponse<EnrichedCase>>> {
    // Reject short search terms before any fetch.
    let search = match params.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => {
            aggregate::validate_search_term(term)?;
            Some(term.to_string())
        }
        _ => None,
    };

    let ids = resolve_scope_ids(&state, &auth, params.scope.as_deref()).await?;

    let enriched =
        aggregator::fetch_enriched_cases(&state.pool, &ids, &state.config.interest(), search.as_deref())
            .await;

    let filtered = aggregate::filter_enriched(enriched, params.status.as_deref(), search.is_some());

    // One-shot page window over the filtered set. Out-of-range pages fall
    // back to page 1 rather than erroring.
    let mut page_state = PageState::new(params.page_size.unwrap_or(DEFAULT_PAGE_SIZE));
    let total_items = filtered.len();
    let total_pages = page_state.total_pages(total_items);
    page_state.set_page(params.page.unwrap_or(1), total_pages);

    let data = page_state.slice(&filtered).to_vec();

    Ok(Json(PageResponse {
        data,
        page: page_state.page,
        page_size: page_state.page_size,
        total_items,
        total_pages,
    }))
}

/// GET /api/v1/cases/{id}
///
/// Fetch a single case with the same enrichment as the listing.
pub async fn get_case(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
) -> AppResult<Json<DataResponse<EnrichedCase>>> {
    ensure_case_visible(&state, &auth, case_id).await?;

    let enriched = aggregator::fetch_enriched_case(&state.pool, case_id, &state.config.interest())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Case",
            id: case_id,
        }))?;

    Ok(Json(DataResponse { data: enriched }))
}

/// POST /api/v1/cases
///
/// Create a case. Staff or admin only.
pub async fn create_case(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateCase>,
) -> AppResult<(StatusCode, Json<DataResponse<Case>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let case = CaseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: case })))
}

/// PUT /api/v1/cases/{id}
///
/// Partially update a case. Staff or admin only.
pub async fn update_case(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
    Json(input): Json<UpdateCase>,
) -> AppResult<Json<DataResponse<Case>>> {
    let case = CaseRepo::update(&state.pool, case_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Case",
            id: case_id,
        }))?;

    Ok(Json(DataResponse { data: case }))
}

/// DELETE /api/v1/cases/{id}
///
/// Soft-delete a case. Staff or admin only. Returns 204 No Content.
pub async fn delete_case(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(case_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CaseRepo::soft_delete(&state.pool, case_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Case",
            id: case_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the id set visible to the user under the requested scope.
///
/// - `mine` (default): cases the user is assigned to as a handler.
/// - `organization`: cases belonging to the user's organization.
/// - `all`: every live case; staff or admin only.
async fn resolve_scope_ids(
    state: &AppState,
    auth: &AuthUser,
    scope: Option<&str>,
) -> AppResult<Vec<DbId>> {
    match scope.unwrap_or("mine") {
        "mine" => Ok(CaseRepo::ids_for_handler(&state.pool, auth.user_id).await?),
        "organization" => {
            let user = UserRepo::find_by_id(&state.pool, auth.user_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "User",
                    id: auth.user_id,
                }))?;
            let Some(org_id) = user.organization_id else {
                return Ok(Vec::new());
            };
            Ok(CaseRepo::ids_for_organization(&state.pool, org_id).await?)
        }
        "all" => {
            if !is_staff_or_admin(&auth.role) {
                return Err(AppError::Core(CoreError::Forbidden(
                    "Staff or Admin role required for scope=all".into(),
                )));
            }
            Ok(CaseRepo::ids_all(&state.pool).await?)
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown scope '{other}'. Expected mine, organization, or all"
        ))),
    }
}

/// Check that a case exists and, for client users, that they are assigned
/// to it. Staff and admin can read any case.
pub(crate) async fn ensure_case_visible(
    state: &AppState,
    auth: &AuthUser,
    case_id: DbId,
) -> AppResult<()> {
    let case = CaseRepo::find_by_id(&state.pool, case_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Case",
            id: case_id,
        }))?;

    if is_staff_or_admin(&auth.role) {
        return Ok(());
    }

    let ids = CaseRepo::ids_for_handler(&state.pool, auth.user_id).await?;
    if ids.contains(&case.id) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Not assigned to this case".into(),
        )))
    }
}
