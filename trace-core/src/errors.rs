//! Error types shared across the workspace.

/// Result alias used throughout the workspace.
pub type TraceResult<T> = Result<T, TraceError>;

/// Errors surfaced by the scan lifecycle and export paths.
///
/// Unresolved account references (edge or ring member ids absent from the
/// topology's node list) are deliberately not an error: the graph index and
/// dossier synthesis treat them as opaque ids.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// No ledger file was selected when a scan was requested.
    #[error("no ledger file selected")]
    MissingInput,

    /// A scan was requested while another one was still in flight.
    #[error("a scan is already in flight")]
    ScanInFlight,

    /// The remote analysis call failed or returned a non-success status.
    #[error("remote analysis failed: {reason}")]
    RemoteAnalysis { reason: String },

    /// The engine responded, but the body did not match the expected schema.
    /// Kept distinct from transport failures so the caller can tell a dead
    /// backend from an incompatible one.
    #[error("malformed analysis result: {reason}")]
    MalformedResult { reason: String },

    /// Configuration file could not be parsed.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Artifact write failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Canonical serialization failure while rendering the artifact.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
