//! System-monitor summary derived from the telemetry store.

use serde::{Deserialize, Serialize};

use crate::telemetry::store::TelemetryStore;

/// Point-in-time summary shown by the system monitor panel.
///
/// Pure data: the run-state inputs (`processing`, `task_counter`,
/// `last_error`) come from the caller, the latest-event fields from the
/// store. Rendering is the presentation layer's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorSnapshot {
    /// Whether a task is currently running.
    pub processing: bool,
    /// How many tasks have been started in this process.
    pub task_counter: u64,
    /// Message of the most recent failure, if any.
    pub last_error: Option<String>,
    /// Stage label of the latest telemetry event.
    pub latest_stage: Option<String>,
    /// Message of the latest telemetry event.
    pub latest_message: Option<String>,
    /// Progress percentage of the latest event, when it carries one.
    pub latest_progress: Option<u64>,
}

impl MonitorSnapshot {
    /// Captures a snapshot from the store and the caller's run state.
    #[must_use]
    pub fn capture(
        store: &TelemetryStore,
        processing: bool,
        task_counter: u64,
        last_error: Option<String>,
    ) -> Self {
        let latest = store.latest();
        Self {
            processing,
            task_counter,
            last_error,
            latest_progress: latest.as_ref().and_then(super::TelemetryEvent::progress),
            latest_stage: latest.as_ref().map(|e| e.stage.clone()),
            latest_message: latest.map(|e| e.message),
        }
    }
}
