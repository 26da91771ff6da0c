//! Case enrichment: the pure half of the Case Aggregator.
//!
//! The API layer fetches case rows and their related row sets (parties,
//! payment activities, handler assignments) in id batches; this module joins
//! them in memory into one display-ready view model per case. Input case
//! order is preserved, so the batched newest-first order coming out of the
//! repository layer carries through to the result.

use serde::Serialize;

use crate::finance::{self, ActivityRecord, InterestConfig};
use crate::party::{pick_by_priority, PartyRecord, CREDITOR_PRIORITY, DEBTOR_PRIORITY};
use crate::status::{resolve_status, StatusInfo};
use crate::types::{DbId, Timestamp};
use crate::error::CoreError;

/// Maximum number of ids per backend query, matching the backend's
/// query-size limit.
pub const BATCH_SIZE: usize = 50;

/// Minimum search term length (characters, after trimming).
pub const MIN_SEARCH_LEN: usize = 2;

/// Split an id set into query-sized batches.
pub fn batch_ids(ids: &[DbId]) -> impl Iterator<Item = &[DbId]> {
    ids.chunks(BATCH_SIZE)
}

/// Validate a search term before any fetch is issued.
///
/// Terms shorter than [`MIN_SEARCH_LEN`] characters are rejected; no backend
/// call may be made for them.
pub fn validate_search_term(term: &str) -> Result<(), CoreError> {
    if term.trim().chars().count() < MIN_SEARCH_LEN {
        return Err(CoreError::Validation(format!(
            "Search term must be at least {MIN_SEARCH_LEN} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Input / output records
// ---------------------------------------------------------------------------

/// A case row as seen by the enrichment logic.
#[derive(Debug, Clone, Serialize)]
pub struct CaseRecord {
    pub id: DbId,
    pub case_number: String,
    pub principal_amount: f64,
    pub status_code: i32,
    pub category: String,
    pub created_at: Timestamp,
}

/// A handler-assignment row as seen by the enrichment logic.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerRecord {
    pub case_id: DbId,
    pub user_id: DbId,
    pub role_label: String,
}

/// Which display fields matched the active search term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchMatches {
    pub creditor: bool,
    pub debtor: bool,
    pub case_number: bool,
}

/// One display-ready case view model.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedCase {
    #[serde(flatten)]
    pub case: CaseRecord,
    pub creditor_name: String,
    pub debtor_name: String,
    pub handler_user_ids: Vec<DbId>,
    pub status_info: StatusInfo,
    pub recovered_amount: f64,
    pub total_debt: f64,
    pub recovery_rate: f64,
    pub matches: SearchMatches,
}

// ---------------------------------------------------------------------------
// Enrichment
// ---------------------------------------------------------------------------

/// Case-insensitive substring match.
fn matches_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Join fetched row sets into enriched view models, one per case.
///
/// Preserves the order of `cases`. Related rows are matched by `case_id`;
/// cases without parties or activities get empty names and zero amounts.
/// When `search_term` is `Some`, each case's creditor name, debtor name, and
/// case number are flagged for later highlighting.
pub fn enrich_cases(
    cases: &[CaseRecord],
    parties: &[PartyRecord],
    activities: &[ActivityRecord],
    handlers: &[HandlerRecord],
    interest: &InterestConfig,
    search_term: Option<&str>,
) -> Vec<EnrichedCase> {
    cases
        .iter()
        .map(|case| {
            let case_parties: Vec<&PartyRecord> =
                parties.iter().filter(|p| p.case_id == case.id).collect();

            let creditor_name = pick_by_priority(&case_parties, CREDITOR_PRIORITY)
                .map(|p| p.display_name().to_string())
                .unwrap_or_default();
            let debtor_name = pick_by_priority(&case_parties, DEBTOR_PRIORITY)
                .map(|p| p.display_name().to_string())
                .unwrap_or_default();

            let handler_user_ids: Vec<DbId> = handlers
                .iter()
                .filter(|h| h.case_id == case.id)
                .map(|h| h.user_id)
                .collect();

            let recovered = finance::recovered_amount(case.id, activities);
            let debt = finance::total_debt(case.principal_amount, interest);

            let matches = match search_term {
                Some(term) => SearchMatches {
                    creditor: matches_term(&creditor_name, term),
                    debtor: matches_term(&debtor_name, term),
                    case_number: matches_term(&case.case_number, term),
                },
                None => SearchMatches::default(),
            };

            EnrichedCase {
                case: case.clone(),
                creditor_name,
                debtor_name,
                handler_user_ids,
                status_info: resolve_status(case.status_code),
                recovered_amount: recovered,
                total_debt: debt,
                recovery_rate: finance::recovery_rate(recovered, debt),
                matches,
            }
        })
        .collect()
}

impl EnrichedCase {
    /// Whether any searchable field matched the active term.
    pub fn any_match(&self) -> bool {
        self.matches.creditor || self.matches.debtor || self.matches.case_number
    }
}

/// Filter an enriched set by status tag and search term.
///
/// A `None` tag keeps everything; a tag keeps cases whose status code is in
/// the tag's code set. A search term keeps cases with at least one match
/// flag set. Relative order is preserved.
pub fn filter_enriched(
    cases: Vec<EnrichedCase>,
    status_tag: Option<&str>,
    search_active: bool,
) -> Vec<EnrichedCase> {
    cases
        .into_iter()
        .filter(|c| match status_tag {
            Some(tag) => crate::status::codes_for_tag(tag).contains(&c.case.status_code),
            None => true,
        })
        .filter(|c| !search_active || c.any_match())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::EntityKind;
    use crate::status;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    fn case(id: DbId, number: &str, principal: f64, status_code: i32) -> CaseRecord {
        CaseRecord {
            id,
            case_number: number.to_string(),
            principal_amount: principal,
            status_code,
            category: "debt_recovery".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn party(case_id: DbId, party_type: &str, name: &str) -> PartyRecord {
        PartyRecord {
            id: 0,
            case_id,
            party_type: party_type.to_string(),
            entity_kind: EntityKind::Individual,
            person_name: Some(name.to_string()),
            company_name: None,
        }
    }

    fn payment(case_id: DbId, amount: f64) -> ActivityRecord {
        ActivityRecord {
            id: 0,
            case_id,
            activity_type: "payment".to_string(),
            amount,
        }
    }

    fn no_interest() -> InterestConfig {
        InterestConfig { rates: vec![] }
    }

    #[test]
    fn batching_splits_at_fifty() {
        let ids: Vec<DbId> = (0..120).collect();
        let batches: Vec<&[DbId]> = batch_ids(&ids).collect();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 50);
        assert_eq!(batches[1].len(), 50);
        assert_eq!(batches[2].len(), 20);
        // Concatenation reproduces the input order.
        let flat: Vec<DbId> = batches.into_iter().flatten().copied().collect();
        assert_eq!(flat, ids);
    }

    #[test]
    fn short_search_term_rejected() {
        assert_matches!(validate_search_term("a"), Err(CoreError::Validation(_)));
        assert_matches!(validate_search_term(" a "), Err(CoreError::Validation(_)));
        assert_matches!(validate_search_term(""), Err(CoreError::Validation(_)));
        assert!(validate_search_term("ab").is_ok());
    }

    #[test]
    fn enrichment_preserves_case_order() {
        let cases = vec![case(3, "C-3", 0.0, 10), case(1, "C-1", 0.0, 10)];
        let out = enrich_cases(&cases, &[], &[], &[], &no_interest(), None);
        let ids: Vec<DbId> = out.iter().map(|e| e.case.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn creditor_resolved_by_priority_not_storage_order() {
        let cases = vec![case(1, "C-1", 0.0, 10)];
        let parties = vec![party(1, "debtor", "B"), party(1, "creditor", "A")];
        let out = enrich_cases(&cases, &parties, &[], &[], &no_interest(), None);
        assert_eq!(out[0].creditor_name, "A");
        assert_eq!(out[0].debtor_name, "B");
    }

    #[test]
    fn recovered_and_debt_derived_per_case() {
        let cases = vec![case(1, "C-1", 1000.0, 10)];
        let activities = vec![
            payment(1, 100.0),
            ActivityRecord {
                id: 0,
                case_id: 1,
                activity_type: "note".to_string(),
                amount: 50.0,
            },
            payment(2, 999.0),
        ];
        let interest = InterestConfig { rates: vec![0.1] };
        let out = enrich_cases(&cases, &[], &activities, &[], &interest, None);
        assert!((out[0].recovered_amount - 100.0).abs() < 1e-9);
        assert!((out[0].total_debt - 1100.0).abs() < 1e-9);
        assert!((out[0].recovery_rate - 100.0 / 1100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_parties_default_to_empty_names() {
        let cases = vec![case(1, "C-1", 0.0, 10)];
        let out = enrich_cases(&cases, &[], &[], &[], &no_interest(), None);
        assert_eq!(out[0].creditor_name, "");
        assert_eq!(out[0].debtor_name, "");
        assert!(out[0].handler_user_ids.is_empty());
    }

    #[test]
    fn unknown_status_substituted_silently() {
        let cases = vec![case(1, "C-1", 0.0, 777)];
        let out = enrich_cases(&cases, &[], &[], &[], &no_interest(), None);
        assert_eq!(out[0].status_info.label, "Unknown");
    }

    #[test]
    fn search_flags_are_case_insensitive() {
        let cases = vec![case(1, "CASE-2026-001", 0.0, 10)];
        let parties = vec![party(1, "creditor", "Acme Corp")];
        let out = enrich_cases(&cases, &parties, &[], &[], &no_interest(), Some("acme"));
        assert!(out[0].matches.creditor);
        assert!(!out[0].matches.debtor);
        assert!(!out[0].matches.case_number);

        let out = enrich_cases(&cases, &parties, &[], &[], &no_interest(), Some("2026"));
        assert!(out[0].matches.case_number);
    }

    #[test]
    fn no_search_term_leaves_flags_clear() {
        let cases = vec![case(1, "C-1", 0.0, 10)];
        let parties = vec![party(1, "creditor", "C")];
        let out = enrich_cases(&cases, &parties, &[], &[], &no_interest(), None);
        assert_eq!(out[0].matches, SearchMatches::default());
    }

    #[test]
    fn filter_by_status_tag() {
        let cases = vec![
            case(1, "C-1", 0.0, status::STATUS_INTAKE),
            case(2, "C-2", 0.0, status::STATUS_LITIGATION),
        ];
        let enriched = enrich_cases(&cases, &[], &[], &[], &no_interest(), None);
        let open = filter_enriched(enriched.clone(), Some(status::TAG_OPEN), false);
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].case.id, 1);

        let unknown = filter_enriched(enriched, Some("archived"), false);
        assert!(unknown.is_empty());
    }

    #[test]
    fn filter_by_search_keeps_matches_only() {
        let cases = vec![case(1, "ALPHA-1", 0.0, 10), case(2, "BETA-2", 0.0, 10)];
        let enriched = enrich_cases(&cases, &[], &[], &[], &no_interest(), Some("alpha"));
        let filtered = filter_enriched(enriched, None, true);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].case.id, 1);
    }
}
