//! Append-only telemetry store backing the mission feed.

use parking_lot::RwLock;

use crate::telemetry::event::TelemetryEvent;
use crate::utils::clock_timestamp;

/// Rolling store of telemetry events.
///
/// Appends come from the pipeline runner, reads from the console; the lock
/// guarantees a reader never observes a partially appended event.
/// Retention is unbounded here; bounding happens at the feed
/// ([`TelemetryStore::feed`]), which keeps only the newest entries.
#[derive(Debug, Default)]
pub struct TelemetryStore {
    events: RwLock<Vec<TelemetryEvent>>,
    last_cleared: RwLock<Option<String>>,
}

impl TelemetryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event. Atomic at event granularity.
    pub fn push(&self, event: TelemetryEvent) {
        self.events.write().push(event);
    }

    /// Empties the feed.
    ///
    /// This is the only mutation available to the presentation layer.
    pub fn clear(&self) {
        self.events.write().clear();
        *self.last_cleared.write() = Some(clock_timestamp());
    }

    /// Returns when the feed was last cleared, as `HH:MM:SS`.
    #[must_use]
    pub fn last_cleared(&self) -> Option<String> {
        self.last_cleared.read().clone()
    }

    /// Returns the number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Returns a copy of all stored events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TelemetryEvent> {
        self.events.read().clone()
    }

    /// Returns the most recent event, if any.
    #[must_use]
    pub fn latest(&self) -> Option<TelemetryEvent> {
        self.events.read().last().cloned()
    }

    /// Returns the last `max_items` events, newest first, for display.
    #[must_use]
    pub fn feed(&self, max_items: usize) -> Vec<TelemetryEvent> {
        let events = self.events.read();
        let start = events.len().saturating_sub(max_items);
        events[start..].iter().rev().cloned().collect()
    }
}
