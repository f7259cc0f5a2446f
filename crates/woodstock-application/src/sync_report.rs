//! Outcome counters for a sync pass.

use serde::Serialize;

/// Per-pass tally, logged at the end of every `sync`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Profiles looked at
    pub processed: usize,
    /// Profiles written back
    pub updated: usize,
    /// Profiles with no match in the remote directory
    pub skipped: usize,
    /// Profiles whose lookup failed before an answer came back
    pub failed: usize,
}

impl SyncReport {
    pub(crate) fn record_updated(&mut self) {
        self.processed += 1;
        self.updated += 1;
    }

    pub(crate) fn record_skipped(&mut self) {
        self.processed += 1;
        self.skipped += 1;
    }

    pub(crate) fn record_failed(&mut self) {
        self.processed += 1;
        self.failed += 1;
    }
}

impl std::fmt::Display for SyncReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} processed, {} updated, {} skipped, {} failed",
            self.processed, self.updated, self.skipped, self.failed
        )
    }
}
