//! Canonical artifact rendering.
//!
//! The export is a deep copy of the analysis object with `metadata` stripped
//! from every flagged account, serialized with the source field order and
//! 2-space indentation. Rendering the same report twice yields byte-identical
//! output: no timestamps, no generated ids, no map key reordering.

use std::path::{Path, PathBuf};

use serde::Serialize;

use trace_core::errors::TraceResult;
use trace_core::models::{AnalysisReport, FraudRing, Summary, SuspiciousAccount};

/// File name of the exported artifact.
pub const ARTIFACT_NAME: &str = "mule_detection_output.json";

/// A flagged account as exported: everything but `metadata`.
#[derive(Serialize)]
struct ExportAccount<'a> {
    account_id: &'a str,
    suspicion_score: f64,
    status: &'a str,
    detected_patterns: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    ring_id: Option<&'a str>,
}

impl<'a> From<&'a SuspiciousAccount> for ExportAccount<'a> {
    fn from(account: &'a SuspiciousAccount) -> Self {
        Self {
            account_id: &account.account_id,
            suspicion_score: account.suspicion_score,
            status: &account.status,
            detected_patterns: &account.detected_patterns,
            ring_id: account.ring_id.as_deref(),
        }
    }
}

/// The exported analysis object. Field order is the external schema's.
#[derive(Serialize)]
struct ExportReport<'a> {
    summary: &'a Summary,
    suspicious_accounts: Vec<ExportAccount<'a>>,
    fraud_rings: &'a [FraudRing],
}

/// Render the canonical artifact body.
pub fn render(report: &AnalysisReport) -> TraceResult<String> {
    let payload = ExportReport {
        summary: &report.summary,
        suspicious_accounts: report
            .suspicious_accounts
            .iter()
            .map(ExportAccount::from)
            .collect(),
        fraud_rings: &report.fraud_rings,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Write the artifact into `dir` under [`ARTIFACT_NAME`].
pub fn write_artifact(report: &AnalysisReport, dir: &Path) -> TraceResult<PathBuf> {
    let path = dir.join(ARTIFACT_NAME);
    std::fs::write(&path, render(report)?)?;
    tracing::info!("export: wrote {}", path.display());
    Ok(path)
}
