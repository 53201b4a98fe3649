//! Live telemetry event store and feed.
//!
//! The pipeline runner appends [`TelemetryEvent`]s through a
//! [`TelemetrySink`]; the console reads a bounded newest-first feed from
//! the [`TelemetryStore`]. The store is the only concurrency seam in the
//! crate: one external writer, one UI reader, interleaved arbitrarily.

mod event;
mod monitor;
mod sink;
mod store;

pub use event::{EventLevel, TelemetryEvent};
pub use monitor::MonitorSnapshot;
pub use sink::{LoggingTelemetrySink, NoOpTelemetrySink, TelemetrySink};
pub use store::TelemetryStore;
