//! Timestamp helpers shared by the telemetry feed and log display.

use chrono::{DateTime, Utc};

/// Represents a timestamp that can be serialized/deserialized.
pub type Timestamp = DateTime<Utc>;

/// Returns the current UTC time as an ISO 8601 formatted string.
///
/// Matches the log writer's timestamp format:
/// `YYYY-MM-DDTHH:MM:SS.ffffff+00:00`
///
/// # Examples
///
/// ```
/// use taskdeck::utils::iso_timestamp;
///
/// let ts = iso_timestamp();
/// assert!(ts.contains('T'));
/// assert!(ts.ends_with("+00:00"));
/// ```
#[must_use]
pub fn iso_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f+00:00").to_string()
}

/// Returns the current UTC wall-clock time as `HH:MM:SS`.
///
/// Telemetry events carry this short form; it is render-only and never
/// parsed back.
#[must_use]
pub fn clock_timestamp() -> String {
    Utc::now().format("%H:%M:%S").to_string()
}

/// Returns the current UTC timestamp.
#[must_use]
pub fn now_utc() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_timestamp_has_offset() {
        let ts = iso_timestamp();
        assert!(ts.ends_with("+00:00"));
    }

    #[test]
    fn test_clock_timestamp_shape() {
        let ts = clock_timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.matches(':').count(), 2);
    }
}
