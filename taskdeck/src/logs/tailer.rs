//! Bounded tailing and classification of structured log files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default number of trailing lines kept for display.
pub const DEFAULT_MAX_LINES: usize = 50;

/// Display bound for message text; truncation never touches the file.
pub const MAX_MESSAGE_CHARS: usize = 200;

/// Severity classification of a structured log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// `ERROR` level.
    Error,
    /// `WARNING` level.
    Warning,
    /// Any level containing `SUCCESS`.
    Success,
    /// Everything else.
    Normal,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Normal
    }
}

impl Severity {
    /// Classifies a raw level string.
    ///
    /// `ERROR` and `WARNING` match exactly; `SUCCESS` matches anywhere in
    /// the uppercased level (the writer emits levels like `STEP_SUCCESS`).
    #[must_use]
    pub fn classify(level: &str) -> Self {
        if level == "ERROR" {
            Self::Error
        } else if level == "WARNING" {
            Self::Warning
        } else if level.to_uppercase().contains("SUCCESS") {
            Self::Success
        } else {
            Self::Normal
        }
    }

    /// Returns the display color for this severity.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Error => "#ff4444",
            Self::Warning => "#ffaa00",
            Self::Success => "#00ff88",
            Self::Normal => "#00d4ff",
        }
    }
}

/// A successfully parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredRecord {
    /// ISO-8601 timestamp from the writer.
    pub timestamp: String,
    /// Raw level string (e.g. `INFO`, `STEP_SUCCESS`).
    pub level: String,
    /// Log message text.
    pub message: String,
    /// Dotted logger namespace.
    pub namespace: String,
    /// Severity classified from `level`.
    pub severity: Severity,
}

impl StructuredRecord {
    /// Returns the time-of-day portion of the timestamp, at most 12 chars
    /// (`HH:MM:SS.mmm`). Falls back to the tail of non-ISO timestamps.
    #[must_use]
    pub fn time_short(&self) -> String {
        match self.timestamp.rfind('T') {
            Some(idx) => self.timestamp[idx + 1..].chars().take(12).collect(),
            None => {
                let chars: Vec<char> = self.timestamp.chars().collect();
                let start = chars.len().saturating_sub(12);
                chars[start..].iter().collect()
            }
        }
    }

    /// Returns the last dot segment of the namespace.
    #[must_use]
    pub fn namespace_short(&self) -> &str {
        self.namespace.rsplit('.').next().unwrap_or("")
    }

    /// Returns the message bounded to `max_chars` characters for display.
    #[must_use]
    pub fn display_message(&self, max_chars: usize) -> String {
        truncate_chars(&self.message, max_chars)
    }
}

/// One displayed log line: structured when the line parsed, raw otherwise.
///
/// The raw fallback guarantees a malformed line is rendered instead of
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    /// A parsed and classified record.
    Structured(StructuredRecord),
    /// An unparseable line carried verbatim.
    Raw(String),
}

impl LogRecord {
    /// Returns the display text bounded to `max_chars` characters.
    #[must_use]
    pub fn display_text(&self, max_chars: usize) -> String {
        match self {
            Self::Structured(record) => record.display_message(max_chars),
            Self::Raw(line) => truncate_chars(line, max_chars),
        }
    }

    /// Returns the severity; raw lines are unclassified.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Structured(record) => record.severity,
            Self::Raw(_) => Severity::Normal,
        }
    }
}

/// Line shape produced by the log writer; unknown fields are ignored and
/// missing ones defaulted, mirroring the writer's loose schema.
#[derive(Debug, Deserialize)]
struct RawLine {
    #[serde(default)]
    timestamp: String,
    #[serde(default = "default_level")]
    level: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    namespace: String,
}

fn default_level() -> String {
    "INFO".to_string()
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Parses one non-blank line into a record, falling back to raw text.
#[must_use]
pub fn parse_line(line: &str) -> LogRecord {
    match serde_json::from_str::<RawLine>(line) {
        Ok(raw) => {
            let severity = Severity::classify(&raw.level);
            LogRecord::Structured(StructuredRecord {
                timestamp: raw.timestamp,
                level: raw.level,
                message: raw.message,
                namespace: raw.namespace,
                severity,
            })
        }
        Err(_) => LogRecord::Raw(line.to_string()),
    }
}

/// Reads a log file and returns its last `max_lines` non-blank records in
/// original order.
///
/// The whole file is re-read on every call; offsets are never tracked
/// because files are bounded append logs for a single task run. Read
/// failures surface as an error the caller reports for this tick only.
pub fn tail_file(path: &Path, max_lines: usize) -> std::io::Result<Vec<LogRecord>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(max_lines);

    Ok(lines[start..]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect())
}
