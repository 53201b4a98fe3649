//! Telemetry sink trait and implementations.

use tracing::{error, info, warn};

use crate::telemetry::event::{EventLevel, TelemetryEvent};
use crate::telemetry::store::TelemetryStore;

/// Destination for telemetry events emitted by the pipeline runner.
///
/// Recording must never fail or block the writer; implementations swallow
/// their own problems.
pub trait TelemetrySink: Send + Sync {
    /// Records one event.
    fn record(&self, event: TelemetryEvent);
}

/// A sink that discards all events.
///
/// Used as the default when no feed is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTelemetrySink;

impl TelemetrySink for NoOpTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {
        // Intentionally empty - discards all events
    }
}

/// A sink that forwards events to the tracing framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingTelemetrySink;

impl TelemetrySink for LoggingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        match event.level {
            EventLevel::Error => {
                error!(stage = %event.stage, "{}", event.message);
            }
            EventLevel::Warning => {
                warn!(stage = %event.stage, "{}", event.message);
            }
            EventLevel::Info | EventLevel::Success => {
                info!(stage = %event.stage, "{}", event.message);
            }
        }
    }
}

impl TelemetrySink for TelemetryStore {
    fn record(&self, event: TelemetryEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpTelemetrySink;
        sink.record(TelemetryEvent::new("INIT", "booting"));
        // Should not panic
    }

    #[test]
    fn test_logging_sink() {
        let sink = LoggingTelemetrySink;
        sink.record(TelemetryEvent::new("PLAN", "ok").with_level(EventLevel::Success));
        sink.record(TelemetryEvent::new("CODE", "boom").with_level(EventLevel::Error));
        // Should not panic
    }

    #[test]
    fn test_store_as_sink() {
        let store = Arc::new(TelemetryStore::new());
        let sink: Arc<dyn TelemetrySink> = Arc::clone(&store) as Arc<dyn TelemetrySink>;

        sink.record(TelemetryEvent::new("INIT", "booting"));
        assert_eq!(store.len(), 1);
    }
}
