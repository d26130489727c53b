//! Account dossier: the consolidated per-account view shown on selection.

use trace_core::models::{AccountMetadata, AnalysisReport, SuspiciousAccount};

/// Everything known about a selected account.
///
/// Clean accounts get an explicit variant instead of a default-stuffed
/// record, so rendering logic pattern-matches rather than sniffing fields.
/// Works for ids absent from the node list too; those are opaque ids with
/// no additional facts.
#[derive(Debug, Clone, PartialEq)]
pub enum Dossier {
    Flagged(SuspiciousAccount),
    Clean { account_id: String },
}

impl Dossier {
    /// Synthesize the dossier for any account id, flagged or not.
    pub fn for_account(report: &AnalysisReport, account_id: &str) -> Self {
        match report.flagged(account_id) {
            Some(entry) => Dossier::Flagged(entry.clone()),
            None => Dossier::Clean {
                account_id: account_id.to_string(),
            },
        }
    }

    pub fn account_id(&self) -> &str {
        match self {
            Dossier::Flagged(entry) => &entry.account_id,
            Dossier::Clean { account_id } => account_id,
        }
    }

    /// Threat score; zero for clean accounts.
    pub fn suspicion_score(&self) -> f64 {
        match self {
            Dossier::Flagged(entry) => entry.suspicion_score,
            Dossier::Clean { .. } => 0.0,
        }
    }

    pub fn status(&self) -> &str {
        match self {
            Dossier::Flagged(entry) => &entry.status,
            Dossier::Clean { .. } => "CLEAN",
        }
    }

    /// Active pattern flags; empty for clean accounts.
    pub fn detected_patterns(&self) -> &[String] {
        match self {
            Dossier::Flagged(entry) => &entry.detected_patterns,
            Dossier::Clean { .. } => &[],
        }
    }

    /// Volume telemetry; zeroed for clean accounts.
    pub fn metadata(&self) -> AccountMetadata {
        match self {
            Dossier::Flagged(entry) => entry.metadata.clone(),
            Dossier::Clean { .. } => AccountMetadata::default(),
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Dossier::Clean { .. })
    }
}
