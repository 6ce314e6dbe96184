//! Optional progress reporting for long table decodes.

use tracing::debug;

/// Observer for coarse per-record progress while a table is decoded.
///
/// Purely instrumentation: decoding behaves identically with or without a
/// reporter.
pub trait Progress {
    /// Called after each record with the count consumed so far.
    fn record(&self, completed: u64, total: u64);
}

/// Reporter that logs through `tracing` at a fixed record interval.
pub struct LogProgress {
    what: &'static str,
    every: u64,
}

impl LogProgress {
    pub fn new(what: &'static str) -> Self {
        Self { what, every: 1000 }
    }

    pub fn with_interval(what: &'static str, every: u64) -> Self {
        Self {
            what,
            every: every.max(1),
        }
    }
}

impl Progress for LogProgress {
    fn record(&self, completed: u64, total: u64) {
        if completed % self.every == 0 || completed == total {
            debug!(what = self.what, completed, total, "loading");
        }
    }
}
