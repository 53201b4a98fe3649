//! Telemetry event type emitted by the pipeline runner.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::clock_timestamp;

/// Severity tag carried by a telemetry event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    /// Routine progress information.
    Info,
    /// Something degraded but the pipeline continues.
    Warning,
    /// A pipeline step failed.
    Error,
    /// A pipeline step finished successfully.
    Success,
}

impl Default for EventLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// One entry in the live mission feed.
///
/// Events are appended only by the pipeline runner; the console treats
/// them as read-only. The `extra` payload is rendered only when the user
/// expands an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    /// Short label of the pipeline phase (e.g. "PLAN", "CODE").
    pub stage: String,
    /// Human-readable progress text.
    pub message: String,
    /// Wall-clock time as `HH:MM:SS`; render-only.
    pub timestamp: String,
    /// Severity tag.
    #[serde(default)]
    pub level: EventLevel,
    /// Optional structured payload, shown on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Map<String, serde_json::Value>>,
}

impl TelemetryEvent {
    /// Creates an info-level event stamped with the current wall-clock time.
    #[must_use]
    pub fn new(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            message: message.into(),
            timestamp: clock_timestamp(),
            level: EventLevel::default(),
            extra: None,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn with_level(mut self, level: EventLevel) -> Self {
        self.level = level;
        self
    }

    /// Adds one entry to the structured payload.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value);
        self
    }

    /// Returns true if the event carries an expandable payload.
    #[must_use]
    pub fn has_extra(&self) -> bool {
        self.extra.as_ref().is_some_and(|m| !m.is_empty())
    }

    /// Returns the `progress` percentage from the payload, if present.
    #[must_use]
    pub fn progress(&self) -> Option<u64> {
        self.extra.as_ref()?.get("progress")?.as_u64()
    }
}
