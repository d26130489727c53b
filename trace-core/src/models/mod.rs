//! Schema types for the analysis payload and the transaction topology.

pub mod analysis;
pub mod topology;

pub use analysis::{AccountMetadata, AnalysisReport, FraudRing, ScanPayload, Summary, SuspiciousAccount};
pub use topology::{AccountNode, Edge, EndpointRef, ResolvedEdge, Topology};
