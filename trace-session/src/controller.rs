//! ScanController: one scan lifecycle per invocation.

use std::path::{Path, PathBuf};

use tokio::sync::watch;

use trace_core::config::StagedTiming;
use trace_core::errors::{TraceError, TraceResult};

use crate::backend::{AnalysisBackend, ScanInput};
use crate::dossier::Dossier;
use crate::session::SessionData;
use crate::staged::StageGuard;

/// Status line shown while idle.
pub const STATUS_IDLE: &str = "SYSTEM IDLE";
/// Status line set at submission, before the staged sequence starts.
pub const STATUS_SUBMITTED: &str = "INITIALIZING NEURAL GRAPH...";
/// Terminal status line on a successful scan.
pub const STATUS_RESULTS: &str = "THREAT NEUTRALIZED.";
/// Terminal status line on a failed scan.
pub const STATUS_FAILED: &str = "SYSTEM ERROR";

/// Scan lifecycle states.
///
/// `Results` and `Failed` are terminal until the next invocation resets the
/// machine to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Validating,
    Submitted,
    StagedPresentation,
    Results,
    Failed,
}

/// Drives the request/response lifecycle and the cosmetic staged status
/// sequence, and owns the active session data.
pub struct ScanController<B> {
    backend: B,
    timing: StagedTiming,
    state: ScanState,
    session: Option<SessionData>,
    status: watch::Sender<String>,
}

impl<B: AnalysisBackend> ScanController<B> {
    pub fn new(backend: B, timing: StagedTiming) -> Self {
        let (status, _) = watch::channel(STATUS_IDLE.to_string());
        Self {
            backend,
            timing,
            state: ScanState::Idle,
            session: None,
            status,
        }
    }

    /// Subscribe to the status line.
    pub fn status_line(&self) -> watch::Receiver<String> {
        self.status.subscribe()
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The active session, if a scan has succeeded.
    pub fn session(&self) -> Option<&SessionData> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut SessionData> {
        self.session.as_mut()
    }

    /// Run one scan: validate, submit, stage, adopt.
    ///
    /// On success the new payload becomes the active session and any prior
    /// selection is cleared. On failure previously held session data is left
    /// untouched. Dropping the returned future mid-flight aborts the staged
    /// timers; the machine then reports `ScanInFlight` until the controller
    /// is discarded.
    pub async fn run_scan(&mut self, input: ScanInput) -> TraceResult<()> {
        if matches!(
            self.state,
            ScanState::Submitted | ScanState::StagedPresentation
        ) {
            return Err(TraceError::ScanInFlight);
        }

        self.state = ScanState::Validating;
        let Some(file) = input.file else {
            // Surfaced immediately; the engine is never contacted.
            self.state = ScanState::Idle;
            return Err(TraceError::MissingInput);
        };

        self.state = ScanState::Submitted;
        self.status.send_replace(STATUS_SUBMITTED.to_string());
        if let Some(session) = self.session.as_mut() {
            session.clear_selection();
        }
        tracing::info!("scan: submitting ledger {}", file.name);

        let stages = StageGuard::spawn(self.status.clone(), &self.timing);
        self.state = ScanState::StagedPresentation;

        match self.backend.analyze(&file, &input.whitelist).await {
            Ok(payload) => {
                // The response is in; hold the reveal so the staged messages
                // get their screen time.
                tokio::time::sleep(self.timing.reveal_delay()).await;
                drop(stages);
                tracing::info!(
                    "scan: adopted result, {} accounts flagged",
                    payload.analysis.summary.suspicious_accounts_flagged
                );
                self.session = Some(SessionData::new(payload));
                self.state = ScanState::Results;
                self.status.send_replace(STATUS_RESULTS.to_string());
                Ok(())
            }
            Err(e) => {
                drop(stages);
                tracing::warn!("scan: {e}");
                self.state = ScanState::Failed;
                self.status.send_replace(STATUS_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Select an account in the active session and return its dossier.
    /// `None` when no result is held.
    pub fn select(&mut self, account_id: &str) -> Option<Dossier> {
        self.session.as_mut().map(|s| s.select(account_id))
    }

    /// The sanitized payload view, exactly what the artifact will contain.
    pub fn payload_view(&self) -> TraceResult<Option<String>> {
        self.session
            .as_ref()
            .map(|s| trace_report::render(s.analysis()))
            .transpose()
    }

    /// Write the export artifact into `dir`. A no-op returning `Ok(None)`
    /// when no result is held.
    pub fn export_artifact(&self, dir: &Path) -> TraceResult<Option<PathBuf>> {
        self.session
            .as_ref()
            .map(|s| trace_report::write_artifact(s.analysis(), dir))
            .transpose()
    }
}
