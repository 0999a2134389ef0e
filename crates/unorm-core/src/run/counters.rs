//! Per-traversal counters.

use std::path::PathBuf;

/// How processing ended for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Already in the target form.
    Skipped,
    /// Dry run: would be renamed.
    WouldRename,
    Renamed,
    /// Destination taken, left alone by policy.
    Conflict,
    Failed,
    /// Name is not valid UTF-8.
    Unsupported,
}

impl FileOutcome {
    /// Returns `true` if the file was (or in a dry run, would be) renamed.
    pub fn is_change(self) -> bool {
        matches!(self, FileOutcome::WouldRename | FileOutcome::Renamed)
    }
}

/// Counters for one traversal.
///
/// `changed_files + failed_files <= total_files` always holds because every
/// file is recorded exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    pub total_files: usize,
    pub changed_files: usize,
    pub failed_files: usize,
}

impl RunCounters {
    pub fn record(&mut self, outcome: FileOutcome) {
        self.total_files += 1;
        if outcome.is_change() {
            self.changed_files += 1;
        }
        if outcome == FileOutcome::Failed {
            self.failed_files += 1;
        }
    }
}

/// Totals for one recursive traversal of a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub root: PathBuf,
    pub counters: RunCounters,
    pub dry_run: bool,
}

/// Everything a run produced besides its events.
///
/// Holds one [`Summary`] per recursively walked root. Runs over explicit
/// files report each file individually and leave this empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub summaries: Vec<Summary>,
}

impl RunReport {
    /// Sums the counters of every summary.
    pub fn totals(&self) -> RunCounters {
        self.summaries
            .iter()
            .fold(RunCounters::default(), |acc, s| RunCounters {
                total_files: acc.total_files + s.counters.total_files,
                changed_files: acc.changed_files + s.counters.changed_files,
                failed_files: acc.failed_files + s.counters.failed_files,
            })
    }
}
