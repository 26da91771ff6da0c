//! Handlers for recovery statistics (`/statistics/recovery`).

use axum::extract::{Query, State};
use axum::Json;
use lexora_core::finance::{self, CaseFinancials, RecoveryStats};
use lexora_db::repositories::CaseRepo;
use serde::Deserialize;

use crate::aggregator;
use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /statistics/recovery`.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    /// Restrict statistics to one organization's cases.
    pub organization_id: Option<lexora_core::types::DbId>,
}

/// GET /api/v1/statistics/recovery
///
/// Set-wide recovery statistics over all live cases (or one organization's).
/// Staff or admin only. Reuses the batched aggregation pipeline, so a failed
/// batch is excluded from the totals rather than failing the request.
pub async fn recovery_statistics(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<StatsQuery>,
) -> AppResult<Json<DataResponse<RecoveryStats>>> {
    let ids = match params.organization_id {
        Some(org_id) => CaseRepo::ids_for_organization(&state.pool, org_id).await?,
        None => CaseRepo::ids_all(&state.pool).await?,
    };

    let enriched =
        aggregator::fetch_enriched_cases(&state.pool, &ids, &state.config.interest(), None).await;

    let financials: Vec<CaseFinancials> = enriched
        .iter()
        .map(|c| CaseFinancials {
            principal: c.case.principal_amount,
            total_debt: c.total_debt,
            recovered: c.recovered_amount,
        })
        .collect();

    Ok(Json(DataResponse {
        data: finance::recovery_stats(&financials),
    }))
}
