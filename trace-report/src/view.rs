//! Display rows for the threat-register table and the KPI strip.

use trace_core::models::{FraudRing, Summary};

/// Human label for a detected pattern: underscores to spaces, uppercased.
/// `"layered_shell"` becomes `"LAYERED SHELL"`.
pub fn pattern_label(raw: &str) -> String {
    raw.replace('_', " ").to_uppercase()
}

/// One row of the threat-register table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingRow {
    pub ring_id: String,
    pub pattern_label: String,
    pub member_count: usize,
    /// Risk score with one decimal, e.g. `"85.0"`.
    pub risk_display: String,
    /// Member ids joined with `", "`.
    pub members_joined: String,
}

impl From<&FraudRing> for RingRow {
    fn from(ring: &FraudRing) -> Self {
        Self {
            ring_id: ring.ring_id.clone(),
            pattern_label: pattern_label(&ring.pattern_type),
            member_count: ring.member_accounts.len(),
            risk_display: format!("{:.1}", ring.risk_score),
            members_joined: ring.member_accounts.join(", "),
        }
    }
}

/// The four dashboard figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryKpis {
    pub accounts_analyzed: u64,
    pub critical_threats: u64,
    pub mule_rings: u64,
    /// Processing time formatted as `"{:.2}s"`.
    pub compute_time_display: String,
}

impl From<&Summary> for SummaryKpis {
    fn from(summary: &Summary) -> Self {
        Self {
            accounts_analyzed: summary.total_accounts_analyzed,
            critical_threats: summary.suspicious_accounts_flagged,
            mule_rings: summary.fraud_rings_detected,
            compute_time_display: format!("{:.2}s", summary.processing_time_seconds),
        }
    }
}
