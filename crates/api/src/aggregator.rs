//! Case aggregation: the fetching half of the case overview pipeline.
//!
//! Takes a resolved id set, fetches cases and their related row sets in
//! batches of [`BATCH_SIZE`](lexora_core::aggregate::BATCH_SIZE) ids, and
//! joins them into enriched view models via `lexora_core::aggregate`.
//!
//! A failed batch is skipped with a warning rather than failing the whole
//! listing. Ordering is newest-first within each batch; the overall result
//! concatenates batches in id-set order.

use lexora_core::aggregate::{self, CaseRecord, EnrichedCase, HandlerRecord};
use lexora_core::finance::{ActivityRecord, InterestConfig};
use lexora_core::party::PartyRecord;
use lexora_core::types::DbId;
use lexora_db::repositories::{CaseHandlerRepo, CaseRepo, PartyRepo, RecoveryActivityRepo};
use lexora_db::DbPool;

/// Fetch one id batch: cases plus all related rows needed for enrichment.
///
/// Any query failure fails the whole batch; the caller decides whether to
/// skip or propagate.
async fn fetch_batch(
    pool: &DbPool,
    batch: &[DbId],
) -> Result<
    (
        Vec<CaseRecord>,
        Vec<PartyRecord>,
        Vec<ActivityRecord>,
        Vec<HandlerRecord>,
    ),
    sqlx::Error,
> {
    let cases = CaseRepo::list_by_ids(pool, batch).await?;
    let parties = PartyRepo::list_for_cases(pool, batch).await?;
    let activities = RecoveryActivityRepo::list_payments_for_cases(pool, batch).await?;
    let handlers = CaseHandlerRepo::list_for_cases(pool, batch).await?;

    Ok((
        cases.into_iter().map(Into::into).collect(),
        parties.into_iter().map(Into::into).collect(),
        activities.into_iter().map(Into::into).collect(),
        handlers.into_iter().map(Into::into).collect(),
    ))
}

/// Fetch and enrich the cases behind `ids`, batch by batch.
///
/// Batches that fail to fetch are logged and skipped; their cases are absent
/// from the result. An empty id set short-circuits without touching the
/// database.
pub async fn fetch_enriched_cases(
    pool: &DbPool,
    ids: &[DbId],
    interest: &InterestConfig,
    search_term: Option<&str>,
) -> Vec<EnrichedCase> {
    if ids.is_empty() {
        return Vec::new();
    }

    let mut enriched = Vec::with_capacity(ids.len());

    for batch in aggregate::batch_ids(ids) {
        match fetch_batch(pool, batch).await {
            Ok((cases, parties, activities, handlers)) => {
                enriched.extend(aggregate::enrich_cases(
                    &cases,
                    &parties,
                    &activities,
                    &handlers,
                    interest,
                    search_term,
                ));
            }
            Err(err) => {
                tracing::warn!(
                    batch_size = batch.len(),
                    first_id = batch.first(),
                    error = %err,
                    "Skipping case batch that failed to fetch"
                );
            }
        }
    }

    enriched
}

/// Fetch and enrich a single case by id.
///
/// Returns `Ok(None)` when the case does not exist or is soft-deleted.
pub async fn fetch_enriched_case(
    pool: &DbPool,
    id: DbId,
    interest: &InterestConfig,
) -> Result<Option<EnrichedCase>, sqlx::Error> {
    let Some(case) = CaseRepo::find_by_id(pool, id).await? else {
        return Ok(None);
    };

    let ids = [case.id];
    let parties: Vec<PartyRecord> = PartyRepo::list_for_cases(pool, &ids)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let activities: Vec<ActivityRecord> = RecoveryActivityRepo::list_payments_for_cases(pool, &ids)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let handlers: Vec<HandlerRecord> = CaseHandlerRepo::list_for_cases(pool, &ids)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let cases: [CaseRecord; 1] = [case.into()];
    let mut out = aggregate::enrich_cases(&cases, &parties, &activities, &handlers, interest, None);
    Ok(out.pop())
}
