//! Case status codes, display descriptors, and filter-tag mapping.
//!
//! Status codes are small integers stored on the `cases` table. The table
//! below is the single source of truth for labels and display colors; codes
//! that are not in the table resolve to a neutral "Unknown" descriptor
//! rather than an error, so stale or imported rows still render.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Status codes
// ---------------------------------------------------------------------------

pub const STATUS_INTAKE: i32 = 10;
pub const STATUS_DEMAND_SENT: i32 = 20;
pub const STATUS_PAYMENT_PLAN: i32 = 30;
pub const STATUS_LITIGATION: i32 = 40;
pub const STATUS_ENFORCEMENT: i32 = 50;
pub const STATUS_RECOVERED: i32 = 60;
pub const STATUS_WRITTEN_OFF: i32 = 70;
pub const STATUS_CLOSED: i32 = 80;

/// Neutral color used for unresolvable status codes.
const UNKNOWN_COLOR: &str = "#9e9e9e";

/// Display descriptor for a case status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub code: i32,
    pub label: &'static str,
    pub color: &'static str,
}

/// The fixed status table. Order matches the case lifecycle.
const STATUS_TABLE: &[StatusInfo] = &[
    StatusInfo { code: STATUS_INTAKE, label: "Intake", color: "#2196f3" },
    StatusInfo { code: STATUS_DEMAND_SENT, label: "Demand sent", color: "#00bcd4" },
    StatusInfo { code: STATUS_PAYMENT_PLAN, label: "Payment plan", color: "#4caf50" },
    StatusInfo { code: STATUS_LITIGATION, label: "Litigation", color: "#ff9800" },
    StatusInfo { code: STATUS_ENFORCEMENT, label: "Enforcement", color: "#f44336" },
    StatusInfo { code: STATUS_RECOVERED, label: "Recovered", color: "#8bc34a" },
    StatusInfo { code: STATUS_WRITTEN_OFF, label: "Written off", color: "#795548" },
    StatusInfo { code: STATUS_CLOSED, label: "Closed", color: "#607d8b" },
];

impl StatusInfo {
    /// Fallback descriptor for codes not present in the status table.
    pub fn unknown(code: i32) -> Self {
        StatusInfo {
            code,
            label: "Unknown",
            color: UNKNOWN_COLOR,
        }
    }
}

/// Resolve a status code to its descriptor.
///
/// Unresolvable codes are silently substituted with [`StatusInfo::unknown`];
/// callers never see an error for a bad code.
pub fn resolve_status(code: i32) -> StatusInfo {
    STATUS_TABLE
        .iter()
        .find(|s| s.code == code)
        .cloned()
        .unwrap_or_else(|| StatusInfo::unknown(code))
}

// ---------------------------------------------------------------------------
// Filter tags
// ---------------------------------------------------------------------------

/// Status filter tags exposed to the list endpoints.
pub const TAG_OPEN: &str = "open";
pub const TAG_RECOVERY: &str = "recovery";
pub const TAG_LEGAL: &str = "legal";
pub const TAG_CLOSED: &str = "closed";

/// Map a filter tag to the set of underlying status codes it covers.
///
/// Unknown tags map to the empty set and therefore match no cases.
pub fn codes_for_tag(tag: &str) -> &'static [i32] {
    match tag {
        TAG_OPEN => &[STATUS_INTAKE, STATUS_DEMAND_SENT, STATUS_PAYMENT_PLAN],
        TAG_RECOVERY => &[STATUS_PAYMENT_PLAN, STATUS_ENFORCEMENT],
        TAG_LEGAL => &[STATUS_LITIGATION, STATUS_ENFORCEMENT],
        TAG_CLOSED => &[STATUS_RECOVERED, STATUS_WRITTEN_OFF, STATUS_CLOSED],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_code() {
        let info = resolve_status(STATUS_LITIGATION);
        assert_eq!(info.label, "Litigation");
        assert_eq!(info.code, STATUS_LITIGATION);
    }

    #[test]
    fn resolve_unknown_code_falls_back() {
        let info = resolve_status(999);
        assert_eq!(info.label, "Unknown");
        assert_eq!(info.color, UNKNOWN_COLOR);
        // The original code is preserved for display/debugging.
        assert_eq!(info.code, 999);
    }

    #[test]
    fn every_table_entry_resolves_to_itself() {
        for entry in STATUS_TABLE {
            assert_eq!(&resolve_status(entry.code), entry);
        }
    }

    #[test]
    fn open_tag_covers_pre_litigation_codes() {
        let codes = codes_for_tag(TAG_OPEN);
        assert!(codes.contains(&STATUS_INTAKE));
        assert!(codes.contains(&STATUS_DEMAND_SENT));
        assert!(!codes.contains(&STATUS_LITIGATION));
    }

    #[test]
    fn unknown_tag_matches_nothing() {
        assert!(codes_for_tag("archived").is_empty());
        assert!(codes_for_tag("").is_empty());
    }
}
