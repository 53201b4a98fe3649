//! Active log file resolution.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, warn};

use crate::config::ConsoleConfig;

/// Slack applied when matching a file's modification time against the
/// recorded task start time, absorbing file-creation-vs-start skew.
pub const DEFAULT_TOLERANCE: Duration = Duration::from_secs(10);

/// A candidate log file, recomputed from the filesystem on each resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileDescriptor {
    /// Absolute or directory-relative path of the file.
    pub path: PathBuf,
    /// Modification time from the filesystem.
    pub modified: SystemTime,
}

/// Outcome of one resolution tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSelection {
    /// No log files exist (or the directory is missing/unreadable).
    NoLogs,
    /// A task has started but its log file has not appeared yet; the
    /// caller should retry next tick instead of showing stale data.
    WaitingForNewLog,
    /// The file to tail for the current task.
    Active(LogFileDescriptor),
}

/// Resolves which `*.jsonl` file is "the current run's log".
///
/// A naive most-recent-file rule would pick up a stale log from a prior
/// run during the window before the new run's file is created; the
/// tolerance window closes that race without a handshake with the log
/// writer. The remembered active path is the only cross-call state, and a
/// task boundary always invalidates it.
#[derive(Debug, Clone)]
pub struct LogSelector {
    logs_dir: PathBuf,
    tolerance: Duration,
    workflow_start: Option<SystemTime>,
    active_log: Option<PathBuf>,
}

impl LogSelector {
    /// Creates a selector over the given directory with the default
    /// tolerance window.
    #[must_use]
    pub fn new(logs_dir: impl Into<PathBuf>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            tolerance: DEFAULT_TOLERANCE,
            workflow_start: None,
            active_log: None,
        }
    }

    /// Creates a selector from the console configuration.
    #[must_use]
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(config.logs_dir.clone()).with_tolerance(config.tolerance())
    }

    /// Sets the tolerance window.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the recorded task start time, if a task is running.
    #[must_use]
    pub fn workflow_start(&self) -> Option<SystemTime> {
        self.workflow_start
    }

    /// Returns the remembered active log path.
    #[must_use]
    pub fn active_log(&self) -> Option<&Path> {
        self.active_log.as_deref()
    }

    /// Records a task start and invalidates any remembered selection.
    pub fn begin_task(&mut self, start: SystemTime) {
        self.workflow_start = Some(start);
        self.active_log = None;
    }

    /// Clears the task start time and the remembered selection so a stale
    /// path can never leak into the next task.
    pub fn end_task(&mut self) {
        self.workflow_start = None;
        self.active_log = None;
    }

    /// Resolves the active log file for this tick.
    ///
    /// With a recorded start time, candidates are scanned newest-first and
    /// the first one modified at or after `start - tolerance` wins; if none
    /// qualifies the result is [`LogSelection::WaitingForNewLog`]. Without
    /// a start time, the remembered path is preferred while it still
    /// exists, falling back to the most recently modified file.
    pub fn resolve(&mut self) -> LogSelection {
        let mut candidates = self.scan_candidates();
        if candidates.is_empty() {
            return LogSelection::NoLogs;
        }
        candidates.sort_by(|a, b| b.modified.cmp(&a.modified));

        let selected = if let Some(start) = self.workflow_start {
            let threshold = start.checked_sub(self.tolerance).unwrap_or(SystemTime::UNIX_EPOCH);
            match candidates.into_iter().find(|c| c.modified >= threshold) {
                Some(descriptor) => descriptor,
                None => {
                    debug!("no log file within tolerance window yet");
                    return LogSelection::WaitingForNewLog;
                }
            }
        } else if let Some(remembered) = self
            .active_log
            .as_ref()
            .and_then(|prev| candidates.iter().find(|c| &c.path == prev).cloned())
        {
            remembered
        } else {
            // Sorted descending, so the first candidate is the newest.
            candidates.remove(0)
        };

        self.active_log = Some(selected.path.clone());
        LogSelection::Active(selected)
    }

    fn scan_candidates(&self) -> Vec<LogFileDescriptor> {
        let entries = match fs::read_dir(&self.logs_dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %self.logs_dir.display(), %err, "log directory not readable");
                return Vec::new();
            }
        };

        let mut candidates = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("jsonl") {
                continue;
            }
            match entry.metadata() {
                Ok(meta) if meta.is_file() => match meta.modified() {
                    Ok(modified) => candidates.push(LogFileDescriptor { path, modified }),
                    Err(err) => {
                        warn!(file = %path.display(), %err, "skipping log file without mtime");
                    }
                },
                Ok(_) => {}
                Err(err) => {
                    warn!(file = %path.display(), %err, "skipping unreadable log file");
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::{File, FileTimes};

    fn touch(dir: &Path, name: &str, modified: SystemTime) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "{}\n").unwrap();
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_times(FileTimes::new().set_modified(modified))
            .unwrap();
        path
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_missing_directory_is_no_logs() {
        let mut selector = LogSelector::new("/nonexistent/taskdeck-logs");
        assert_eq!(selector.resolve(), LogSelection::NoLogs);
    }

    #[test]
    fn test_empty_directory_is_no_logs() {
        let dir = tempfile::tempdir().unwrap();
        let mut selector = LogSelector::new(dir.path());
        assert_eq!(selector.resolve(), LogSelection::NoLogs);
    }

    #[test]
    fn test_non_jsonl_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let mut selector = LogSelector::new(dir.path());
        assert_eq!(selector.resolve(), LogSelection::NoLogs);
    }

    #[test]
    fn test_newest_qualifying_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let start = SystemTime::now();
        touch(dir.path(), "old.jsonl", start - secs(30));
        touch(dir.path(), "recent.jsonl", start - secs(5));
        let newest = touch(dir.path(), "new.jsonl", start + secs(2));

        let mut selector = LogSelector::new(dir.path());
        selector.begin_task(start);

        // Scan order is newest-first, so T+2s beats the also-qualifying T-5s.
        match selector.resolve() {
            LogSelection::Active(descriptor) => assert_eq!(descriptor.path, newest),
            other => panic!("expected active selection, got {other:?}"),
        }
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let dir = tempfile::tempdir().unwrap();
        let start = SystemTime::now();
        let at_boundary = touch(dir.path(), "boundary.jsonl", start - secs(10));

        let mut selector = LogSelector::new(dir.path());
        selector.begin_task(start);

        match selector.resolve() {
            LogSelection::Active(descriptor) => assert_eq!(descriptor.path, at_boundary),
            other => panic!("expected active selection, got {other:?}"),
        }
    }

    #[test]
    fn test_one_second_past_tolerance_waits() {
        let dir = tempfile::tempdir().unwrap();
        let start = SystemTime::now();
        touch(dir.path(), "stale.jsonl", start - secs(11));

        let mut selector = LogSelector::new(dir.path());
        selector.begin_task(start);

        assert_eq!(selector.resolve(), LogSelection::WaitingForNewLog);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let start = SystemTime::now();
        touch(dir.path(), "a.jsonl", start - secs(8));
        touch(dir.path(), "b.jsonl", start - secs(3));

        let mut selector = LogSelector::new(dir.path());
        selector.begin_task(start);

        let first = selector.resolve();
        for _ in 0..5 {
            assert_eq!(selector.resolve(), first);
        }
    }

    #[test]
    fn test_no_start_time_falls_back_to_newest() {
        let dir = tempfile::tempdir().unwrap();
        let now = SystemTime::now();
        touch(dir.path(), "older.jsonl", now - secs(60));
        let newest = touch(dir.path(), "newer.jsonl", now - secs(1));

        let mut selector = LogSelector::new(dir.path());
        match selector.resolve() {
            LogSelection::Active(descriptor) => assert_eq!(descriptor.path, newest),
            other => panic!("expected active selection, got {other:?}"),
        }
    }

    #[test]
    fn test_remembered_file_preferred_over_newer() {
        let dir = tempfile::tempdir().unwrap();
        let now = SystemTime::now();
        let remembered = touch(dir.path(), "current.jsonl", now - secs(20));

        let mut selector = LogSelector::new(dir.path());
        selector.resolve();
        assert_eq!(selector.active_log(), Some(remembered.as_path()));

        // A newer file appears, but without a task start the remembered
        // selection stays put.
        touch(dir.path(), "later.jsonl", now);
        match selector.resolve() {
            LogSelection::Active(descriptor) => assert_eq!(descriptor.path, remembered),
            other => panic!("expected active selection, got {other:?}"),
        }
    }

    #[test]
    fn test_deleted_remembered_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let now = SystemTime::now();
        let first = touch(dir.path(), "first.jsonl", now - secs(20));

        let mut selector = LogSelector::new(dir.path());
        selector.resolve();

        fs::remove_file(&first).unwrap();
        let replacement = touch(dir.path(), "second.jsonl", now);
        match selector.resolve() {
            LogSelection::Active(descriptor) => assert_eq!(descriptor.path, replacement),
            other => panic!("expected active selection, got {other:?}"),
        }
    }

    #[test]
    fn test_task_boundaries_invalidate_state() {
        let dir = tempfile::tempdir().unwrap();
        let now = SystemTime::now();
        touch(dir.path(), "run1.jsonl", now - secs(5));

        let mut selector = LogSelector::new(dir.path());
        selector.begin_task(now);
        assert!(matches!(selector.resolve(), LogSelection::Active(_)));
        assert!(selector.active_log().is_some());

        selector.end_task();
        assert!(selector.workflow_start().is_none());
        assert!(selector.active_log().is_none());

        // A new task must not inherit the previous selection.
        selector.begin_task(now + secs(100));
        assert_eq!(selector.resolve(), LogSelection::WaitingForNewLog);
    }

    #[test]
    fn test_custom_tolerance() {
        let dir = tempfile::tempdir().unwrap();
        let start = SystemTime::now();
        touch(dir.path(), "early.jsonl", start - secs(25));

        let mut selector = LogSelector::new(dir.path()).with_tolerance(secs(30));
        selector.begin_task(start);
        assert!(matches!(selector.resolve(), LogSelection::Active(_)));
    }
}
