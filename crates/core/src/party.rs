//! Party roles and creditor/debtor resolution.
//!
//! A case can carry any number of party rows; nothing in the data model
//! enforces "one creditor, one debtor". The aggregation layer resolves "the"
//! creditor-like and debtor-like party with an explicit priority-list scan:
//! the first type in the priority list that has any matching row wins,
//! regardless of storage order. This makes the original best-effort
//! first-match behavior a deliberate, tested tie-break rule.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Party type tags
// ---------------------------------------------------------------------------

pub const PARTY_CREDITOR: &str = "creditor";
pub const PARTY_PLAINTIFF: &str = "plaintiff";
pub const PARTY_APPLICANT: &str = "applicant";
pub const PARTY_DEBTOR: &str = "debtor";
pub const PARTY_DEFENDANT: &str = "defendant";
pub const PARTY_RESPONDENT: &str = "respondent";

/// Priority list for resolving the creditor-like party of a case.
pub const CREDITOR_PRIORITY: &[&str] = &[PARTY_CREDITOR, PARTY_PLAINTIFF, PARTY_APPLICANT];

/// Priority list for resolving the debtor-like party of a case.
pub const DEBTOR_PRIORITY: &[&str] = &[PARTY_DEBTOR, PARTY_DEFENDANT, PARTY_RESPONDENT];

// ---------------------------------------------------------------------------
// Entity kind
// ---------------------------------------------------------------------------

/// Whether a party is a natural person or an organization.
///
/// Determines which name field holds the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Individual,
    Organization,
}

impl EntityKind {
    /// Parse the stored tag. Unknown tags default to `Individual` so a bad
    /// row still renders with its person-name field.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "organization" => Self::Organization,
            _ => Self::Individual,
        }
    }
}

// ---------------------------------------------------------------------------
// Party record
// ---------------------------------------------------------------------------

/// A party row as seen by the aggregation logic.
#[derive(Debug, Clone, Serialize)]
pub struct PartyRecord {
    pub id: DbId,
    pub case_id: DbId,
    pub party_type: String,
    pub entity_kind: EntityKind,
    pub person_name: Option<String>,
    pub company_name: Option<String>,
}

impl PartyRecord {
    /// Resolve the display name from the field matching the entity kind.
    ///
    /// A missing name degrades to an empty string; data-shape
    /// inconsistencies are defaulted, never surfaced as errors.
    pub fn display_name(&self) -> &str {
        let name = match self.entity_kind {
            EntityKind::Individual => &self.person_name,
            EntityKind::Organization => &self.company_name,
        };
        name.as_deref().unwrap_or("")
    }
}

/// Select the first party matching the priority list.
///
/// The scan is priority-outermost: all parties are checked against the first
/// type tag before the second tag is considered, so a `creditor` row wins
/// over a `plaintiff` row even when stored after it.
pub fn pick_by_priority<'a>(
    parties: &'a [&'a PartyRecord],
    priority: &[&str],
) -> Option<&'a PartyRecord> {
    priority
        .iter()
        .find_map(|tag| parties.iter().find(|p| p.party_type == *tag).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(id: DbId, party_type: &str, name: &str) -> PartyRecord {
        PartyRecord {
            id,
            case_id: 1,
            party_type: party_type.to_string(),
            entity_kind: EntityKind::Individual,
            person_name: Some(name.to_string()),
            company_name: None,
        }
    }

    #[test]
    fn priority_beats_storage_order() {
        // Debtor stored first; the creditor row must still win.
        let a = party(1, "debtor", "B");
        let b = party(2, "creditor", "A");
        let parties = vec![&a, &b];

        let picked = pick_by_priority(&parties, CREDITOR_PRIORITY).unwrap();
        assert_eq!(picked.display_name(), "A");
    }

    #[test]
    fn lower_priority_tag_used_when_first_absent() {
        let a = party(1, "plaintiff", "P");
        let b = party(2, "respondent", "R");
        let parties = vec![&a, &b];

        let creditor = pick_by_priority(&parties, CREDITOR_PRIORITY).unwrap();
        assert_eq!(creditor.party_type, "plaintiff");

        let debtor = pick_by_priority(&parties, DEBTOR_PRIORITY).unwrap();
        assert_eq!(debtor.party_type, "respondent");
    }

    #[test]
    fn no_match_yields_none() {
        let a = party(1, "witness", "W");
        let parties = vec![&a];
        assert!(pick_by_priority(&parties, CREDITOR_PRIORITY).is_none());
    }

    #[test]
    fn first_row_wins_within_same_tag() {
        let a = party(1, "creditor", "First");
        let b = party(2, "creditor", "Second");
        let parties = vec![&a, &b];

        let picked = pick_by_priority(&parties, CREDITOR_PRIORITY).unwrap();
        assert_eq!(picked.id, 1);
    }

    #[test]
    fn organization_uses_company_name() {
        let p = PartyRecord {
            id: 1,
            case_id: 1,
            party_type: "creditor".to_string(),
            entity_kind: EntityKind::Organization,
            person_name: Some("Ignored".to_string()),
            company_name: Some("Acme Recovery Ltd".to_string()),
        };
        assert_eq!(p.display_name(), "Acme Recovery Ltd");
    }

    #[test]
    fn missing_name_defaults_to_empty() {
        let p = PartyRecord {
            id: 1,
            case_id: 1,
            party_type: "debtor".to_string(),
            entity_kind: EntityKind::Organization,
            person_name: None,
            company_name: None,
        };
        assert_eq!(p.display_name(), "");
    }

    #[test]
    fn unknown_entity_kind_tag_defaults_to_individual() {
        assert_eq!(EntityKind::from_tag("person"), EntityKind::Individual);
        assert_eq!(EntityKind::from_tag("organization"), EntityKind::Organization);
    }
}
