//! # trace-core
//!
//! Foundation crate for the TRACE forensics front end.
//! Defines the analysis payload schema, errors, and configuration.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::TraceConfig;
pub use errors::{TraceError, TraceResult};
pub use models::{AnalysisReport, ScanPayload, SuspiciousAccount, Topology};
