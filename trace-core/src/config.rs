//! Workspace configuration, loadable from TOML.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{TraceError, TraceResult};

/// Top-level configuration for the TRACE front end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Remote analysis engine settings.
    pub engine: EngineConfig,
    /// Staged status presentation timing.
    pub staging: StagedTiming,
}

impl TraceConfig {
    /// Parse a config from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(input: &str) -> TraceResult<Self> {
        toml::from_str(input).map_err(|e| TraceError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> TraceResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Remote analysis engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Endpoint of the analysis engine.
    pub endpoint: String,
    /// Request timeout (seconds).
    pub request_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/api/analyze".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Timing for the cosmetic staged status sequence.
///
/// Stage offsets are measured from submission time; the reveal delay is
/// measured from response arrival and gates the terminal transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StagedTiming {
    /// Offsets (ms from submission) at which staged messages appear.
    pub stage_offsets_ms: Vec<u64>,
    /// Delay (ms from response arrival) before results are revealed.
    pub reveal_delay_ms: u64,
}

impl Default for StagedTiming {
    fn default() -> Self {
        Self {
            stage_offsets_ms: vec![800, 1600, 2400],
            reveal_delay_ms: 3000,
        }
    }
}

impl StagedTiming {
    /// Stage offsets as durations, in schedule order.
    pub fn stage_offsets(&self) -> impl Iterator<Item = Duration> + '_ {
        self.stage_offsets_ms.iter().map(|&ms| Duration::from_millis(ms))
    }

    /// Reveal delay as a duration.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}
