//! # trace-session
//!
//! One scan lifecycle per invocation: validate input, submit the ledger to
//! the remote engine, walk the staged status presentation, and adopt the
//! result as the active session. Selection and dossier synthesis operate on
//! the adopted session; export is delegated to `trace-report`.

pub mod backend;
pub mod controller;
pub mod dossier;
pub mod session;
mod staged;

pub use backend::{AnalysisBackend, HttpBackend, LedgerFile, ScanInput};
pub use controller::{
    ScanController, ScanState, STATUS_FAILED, STATUS_IDLE, STATUS_RESULTS, STATUS_SUBMITTED,
};
pub use dossier::Dossier;
pub use session::SessionData;
