//! Structured-log selection and tailing.
//!
//! The pipeline writes append-only `*.jsonl` files (one JSON object per
//! line) into a known directory. [`LogSelector`] deterministically picks
//! the current task's file, disambiguating a not-yet-created new log from
//! stale logs of previous runs; [`tail_file`] reads the selected file and
//! classifies the last few records for display.

mod selector;
mod tailer;

pub use selector::{LogFileDescriptor, LogSelection, LogSelector, DEFAULT_TOLERANCE};
pub use tailer::{
    parse_line, tail_file, LogRecord, Severity, StructuredRecord, DEFAULT_MAX_LINES,
    MAX_MESSAGE_CHARS,
};
