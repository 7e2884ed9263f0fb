//! # Command History Log
//!
//! Every accepted input line is appended to a persistent log file. Writes
//! are batched: the log buffers lines in memory and appends once every
//! two recorded commands, plus a final flush on shutdown.
//!
//! History is a side channel: a failed write is logged and the command
//! loop carries on.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, warn};

/// Number of recorded lines that triggers a flush.
const FLUSH_BATCH: usize = 2;

/// Buffered append-only writer for the command history file.
#[derive(Debug)]
pub struct HistoryLog {
    path: PathBuf,
    pending: Vec<String>,
}

impl HistoryLog {
    /// Creates a history log writing to `path`. The file is created on
    /// first flush.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HistoryLog {
            path: path.into(),
            pending: Vec::new(),
        }
    }

    /// Records one raw input line, flushing when the batch fills up.
    pub fn record(&mut self, line: &str) {
        self.pending.push(line.to_string());
        if self.pending.len() >= FLUSH_BATCH {
            self.flush();
        }
    }

    /// Appends all buffered lines to the history file.
    ///
    /// The buffer is drained whether or not the write succeeds; history
    /// must never stall or kill the command loop.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let mut data = self.pending.join("\n");
        data.push('\n');
        self.pending.clear();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path);

        match file {
            Ok(mut file) => {
                if let Err(err) = file.write_all(data.as_bytes()) {
                    warn!(path = %self.path.display(), error = %err, "Failed to append command history");
                } else {
                    debug!(path = %self.path.display(), "Flushed command history");
                }
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Failed to open command history file");
            }
        }
    }

    /// Number of lines waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_path() -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("depot-history-{}-{}.log", std::process::id(), n))
    }

    #[test]
    fn test_flushes_every_two_commands() {
        let path = scratch_path();
        let mut log = HistoryLog::new(&path);

        log.record("ADD WAREHOUSE 970");
        assert_eq!(log.pending(), 1);
        assert!(!path.exists());

        log.record("LIST WAREHOUSES");
        assert_eq!(log.pending(), 0);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "ADD WAREHOUSE 970\nLIST WAREHOUSES\n");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_final_flush_writes_odd_line_out() {
        let path = scratch_path();
        let mut log = HistoryLog::new(&path);

        log.record("LIST PRODUCTS");
        log.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "LIST PRODUCTS\n");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_appends_across_batches() {
        let path = scratch_path();
        let mut log = HistoryLog::new(&path);

        log.record("one");
        log.record("two");
        log.record("three");
        log.record("four");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "one\ntwo\nthree\nfour\n");

        let _ = std::fs::remove_file(&path);
    }
}
