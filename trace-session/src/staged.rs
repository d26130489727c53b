//! Staged status presentation: cosmetic messages on a fixed schedule.
//!
//! Stage timers are relative to submission time and fire on schedule even if
//! the response arrives first. The task is held by a guard and aborted when
//! the scan settles or the driving future is dropped, so no status mutation
//! can happen after disposal.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use trace_core::config::StagedTiming;

/// Staged messages, in schedule order.
pub(crate) const STAGE_MESSAGES: [&str; 3] = [
    "DETECTING CYCLICAL TYPOLOGIES...",
    "ANALYZING TEMPORAL SMURFING...",
    "TRACING MULTI-HOP SHELLS...",
];

/// Owns the spawned stage task; aborts it on drop.
pub(crate) struct StageGuard {
    handle: JoinHandle<()>,
}

impl StageGuard {
    /// Spawn the stage sequence against `status`, offsets measured from now.
    pub(crate) fn spawn(status: watch::Sender<String>, timing: &StagedTiming) -> Self {
        let submitted_at = Instant::now();
        let offsets: Vec<_> = timing.stage_offsets().collect();
        let handle = tokio::spawn(async move {
            for (offset, message) in offsets.into_iter().zip(STAGE_MESSAGES) {
                tokio::time::sleep_until(submitted_at + offset).await;
                status.send_replace(message.to_string());
            }
        });
        Self { handle }
    }
}

impl Drop for StageGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
