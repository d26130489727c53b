//! Active session data: one payload, one derived index, one selection.

use trace_core::models::{AnalysisReport, ScanPayload, Topology};
use trace_graph::GraphIndex;

use crate::dossier::Dossier;

/// Single-owner session state adopted on a successful scan.
///
/// The payload is immutable for the life of the session; a new scan replaces
/// the whole value, so consumers always observe one result in full.
#[derive(Debug)]
pub struct SessionData {
    payload: ScanPayload,
    index: GraphIndex,
    selection: Option<String>,
}

impl SessionData {
    /// Adopt a payload and derive its adjacency index.
    pub fn new(payload: ScanPayload) -> Self {
        let index = GraphIndex::build(&payload.topology);
        Self {
            payload,
            index,
            selection: None,
        }
    }

    pub fn analysis(&self) -> &AnalysisReport {
        &self.payload.analysis
    }

    pub fn topology(&self) -> &Topology {
        &self.payload.topology
    }

    /// Read-only adjacency views, safe to query once per pointer move.
    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    /// Select an account and return its dossier.
    pub fn select(&mut self, account_id: &str) -> Dossier {
        self.selection = Some(account_id.to_string());
        Dossier::for_account(&self.payload.analysis, account_id)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Dossier for the current selection, if any.
    pub fn selected_dossier(&self) -> Option<Dossier> {
        self.selection
            .as_deref()
            .map(|id| Dossier::for_account(&self.payload.analysis, id))
    }
}
