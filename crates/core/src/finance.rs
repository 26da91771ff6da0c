//! Financial derivation: recovered amounts, total debt, recovery rates.
//!
//! The debt model is deliberately simple: interest is a flat percentage of
//! the principal per configured rate, with no date ranges and no
//! compounding. It approximates the statutory + contractual interest shown
//! on the case screens and is not an accurate financial computation.

use serde::Serialize;

use crate::types::DbId;

/// Activity type tag whose rows contribute to recovered amounts.
pub const ACTIVITY_PAYMENT: &str = "payment";

/// A recovery-activity row as seen by the aggregation logic.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecord {
    pub id: DbId,
    pub case_id: DbId,
    pub activity_type: String,
    pub amount: f64,
}

/// Interest rates applied to a case principal.
///
/// Each rate is a fraction (0.08 = 8%). Rates are summed, not compounded.
#[derive(Debug, Clone)]
pub struct InterestConfig {
    pub rates: Vec<f64>,
}

impl Default for InterestConfig {
    /// Statutory reference rate plus contractual penalty rate.
    fn default() -> Self {
        Self {
            rates: vec![0.08, 0.05],
        }
    }
}

impl InterestConfig {
    /// Sum of all configured rates.
    pub fn total_rate(&self) -> f64 {
        self.rates.iter().sum()
    }
}

/// Sum of payment amounts for one case.
///
/// Rows of other activity types, or belonging to other cases, are excluded.
/// The repository layer already filters fetches to payments; filtering again
/// here keeps the function safe over mixed input.
pub fn recovered_amount(case_id: DbId, activities: &[ActivityRecord]) -> f64 {
    activities
        .iter()
        .filter(|a| a.case_id == case_id && a.activity_type == ACTIVITY_PAYMENT)
        .map(|a| a.amount)
        .sum()
}

/// Total debt: principal plus flat interest over the summed rates.
pub fn total_debt(principal: f64, config: &InterestConfig) -> f64 {
    principal + principal * config.total_rate()
}

/// Fraction of the total debt recovered, clamped to `[0, 1]`.
///
/// A zero or negative total debt yields 0 rather than a division artifact.
pub fn recovery_rate(recovered: f64, total_debt: f64) -> f64 {
    if total_debt <= 0.0 {
        return 0.0;
    }
    (recovered / total_debt).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Aggregate statistics
// ---------------------------------------------------------------------------

/// Recovery statistics over a set of cases.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecoveryStats {
    pub case_count: u64,
    pub total_principal: f64,
    pub total_debt: f64,
    pub total_recovered: f64,
    /// Overall recovered / total-debt fraction across the whole set.
    pub overall_rate: f64,
    /// Cases whose recovered amount covers their full debt.
    pub fully_recovered: u64,
}

/// One case's inputs to the statistics aggregation.
#[derive(Debug, Clone, Copy)]
pub struct CaseFinancials {
    pub principal: f64,
    pub total_debt: f64,
    pub recovered: f64,
}

/// Fold per-case financials into set-wide recovery statistics.
pub fn recovery_stats(cases: &[CaseFinancials]) -> RecoveryStats {
    let mut stats = RecoveryStats {
        case_count: cases.len() as u64,
        ..RecoveryStats::default()
    };

    for c in cases {
        stats.total_principal += c.principal;
        stats.total_debt += c.total_debt;
        stats.total_recovered += c.recovered;
        if c.total_debt > 0.0 && c.recovered >= c.total_debt {
            stats.fully_recovered += 1;
        }
    }

    stats.overall_rate = recovery_rate(stats.total_recovered, stats.total_debt);
    stats
}
