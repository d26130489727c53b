//! Remote analysis engine seam.
//!
//! The engine is an external collaborator: one multipart POST carrying the
//! ledger CSV and a free-text whitelist, one JSON response. The controller
//! talks to it through `AnalysisBackend`, so tests can swap in a local stub.

use std::future::Future;
use std::time::Duration;

use trace_core::config::EngineConfig;
use trace_core::errors::{TraceError, TraceResult};
use trace_core::models::ScanPayload;

/// The ledger handed over by the (external) upload widget.
#[derive(Debug, Clone)]
pub struct LedgerFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Everything a scan invocation needs from the caller.
#[derive(Debug, Clone, Default)]
pub struct ScanInput {
    /// The selected ledger, if any. Absence fails validation.
    pub file: Option<LedgerFile>,
    /// Comma-separated account ids the engine should ignore. May be empty.
    pub whitelist: String,
}

impl ScanInput {
    /// Convenience constructor for a populated input.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, whitelist: impl Into<String>) -> Self {
        Self {
            file: Some(LedgerFile {
                name: name.into(),
                bytes,
            }),
            whitelist: whitelist.into(),
        }
    }
}

/// The remote analysis call. Exactly one request per scan; not cancellable,
/// not retried.
pub trait AnalysisBackend {
    fn analyze(
        &self,
        file: &LedgerFile,
        whitelist: &str,
    ) -> impl Future<Output = TraceResult<ScanPayload>> + Send;
}

/// Production backend: multipart POST to the configured engine endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    /// Build a client against the configured engine.
    pub fn new(config: &EngineConfig) -> TraceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| TraceError::RemoteAnalysis {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, file: &LedgerFile, whitelist: &str) -> TraceResult<ScanPayload> {
        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone()),
            )
            .text("whitelist", whitelist.to_string());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TraceError::RemoteAnalysis {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TraceError::RemoteAnalysis {
                reason: format!("engine returned {status}"),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TraceError::RemoteAnalysis {
                reason: e.to_string(),
            })?;
        ScanPayload::from_json_slice(&body)
    }
}
