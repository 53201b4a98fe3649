//! Console configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the console core.
///
/// Every field has a serde default so partial configuration files work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Directory the log writer drops `*.jsonl` files into.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,
    /// Trailing log lines kept for display.
    #[serde(default = "default_max_log_lines")]
    pub max_log_lines: usize,
    /// Events shown in the mission feed.
    #[serde(default = "default_max_feed_items")]
    pub max_feed_items: usize,
    /// Log-selection tolerance window in seconds.
    #[serde(default = "default_tolerance_seconds")]
    pub tolerance_seconds: f64,
    /// Display bound for log message text.
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_max_log_lines() -> usize {
    50
}

fn default_max_feed_items() -> usize {
    12
}

fn default_tolerance_seconds() -> f64 {
    10.0
}

fn default_max_message_chars() -> usize {
    200
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            max_log_lines: default_max_log_lines(),
            max_feed_items: default_max_feed_items(),
            tolerance_seconds: default_tolerance_seconds(),
            max_message_chars: default_max_message_chars(),
        }
    }
}

impl ConsoleConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log directory.
    #[must_use]
    pub fn with_logs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = dir.into();
        self
    }

    /// Sets the number of trailing log lines kept.
    #[must_use]
    pub fn with_max_log_lines(mut self, lines: usize) -> Self {
        self.max_log_lines = lines;
        self
    }

    /// Sets the feed size.
    #[must_use]
    pub fn with_max_feed_items(mut self, items: usize) -> Self {
        self.max_feed_items = items;
        self
    }

    /// Sets the tolerance window in seconds.
    #[must_use]
    pub fn with_tolerance_seconds(mut self, seconds: f64) -> Self {
        self.tolerance_seconds = seconds;
        self
    }

    /// Returns the tolerance window as a `Duration`.
    #[must_use]
    pub fn tolerance(&self) -> Duration {
        Duration::from_secs_f64(self.tolerance_seconds)
    }
}
