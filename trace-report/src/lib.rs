//! # trace-report
//!
//! Canonicalizes the analysis result into the fixed external schema and
//! emits the downloadable artifact, plus the display-row views fed to the
//! threat-register table and the KPI strip.

pub mod exporter;
pub mod view;

pub use exporter::{render, write_artifact, ARTIFACT_NAME};
pub use view::{pattern_label, RingRow, SummaryKpis};
