//! Analysis result schema — the engine's verdict over one ledger.
//!
//! Field declaration order is load-bearing: the report exporter serializes
//! these structs as-is, and the external schema fixes the key order.

use serde::{Deserialize, Serialize};

use crate::errors::{TraceError, TraceResult};
use crate::models::topology::Topology;

/// Headline figures for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_accounts_analyzed: u64,
    pub suspicious_accounts_flagged: u64,
    pub fraud_rings_detected: u64,
    pub processing_time_seconds: f64,
}

/// Volume telemetry attached to a flagged account. Shown in the dossier
/// side panel, stripped from the exported artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountMetadata {
    pub total_sent: f64,
    pub total_received: f64,
    pub tx_count: u64,
}

/// One flagged account. Absence of an entry for a given id means "clean".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousAccount {
    pub account_id: String,
    /// Treated as a percentage for bar rendering; not clamped to [0, 100].
    pub suspicion_score: f64,
    #[serde(default = "default_status")]
    pub status: String,
    pub detected_patterns: Vec<String>,
    /// Ring this account was flagged under. Older engine builds omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_id: Option<String>,
    #[serde(default)]
    pub metadata: AccountMetadata,
}

fn default_status() -> String {
    "FLAGGED".to_string()
}

/// A detected group of cooperating accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudRing {
    pub ring_id: String,
    pub pattern_type: String,
    pub member_accounts: Vec<String>,
    pub risk_score: f64,
}

/// The engine's full verdict: summary, flagged accounts, detected rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub suspicious_accounts: Vec<SuspiciousAccount>,
    pub fraud_rings: Vec<FraudRing>,
}

impl AnalysisReport {
    /// Look up the flagged entry for an account, if any.
    pub fn flagged(&self, account_id: &str) -> Option<&SuspiciousAccount> {
        self.suspicious_accounts
            .iter()
            .find(|a| a.account_id == account_id)
    }

    /// Whether an account appears in the flagged list.
    pub fn is_flagged(&self, account_id: &str) -> bool {
        self.flagged(account_id).is_some()
    }
}

/// The complete engine response: the verdict plus the raw graph used to
/// render it. Created once per successful scan and replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanPayload {
    pub analysis: AnalysisReport,
    pub topology: Topology,
}

impl ScanPayload {
    /// Decode and validate an engine response body.
    ///
    /// Any missing or mistyped field is a `MalformedResult`, surfaced at the
    /// boundary instead of failing deep inside rendering.
    pub fn from_json_slice(body: &[u8]) -> TraceResult<Self> {
        serde_json::from_slice(body).map_err(|e| TraceError::MalformedResult {
            reason: e.to_string(),
        })
    }
}
