//! Notifications the core sends to the frontend during a run.
//!
//! The orchestrator never prints anything. It reports each step as an
//! [`Event`] and the frontend decides how to present it.

use std::path::PathBuf;

use crate::norm::form::{FormSet, NormalizationForm};
use crate::run::counters::Summary;

/// A notification the core sends back to the frontend.
///
/// Per-file events arrive in the order the file moves through its states:
/// `Entry`, then `Classified`, then exactly one terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A file was discovered.
    Entry {
        path: PathBuf,
        is_symlink: bool,
    },
    /// The forms the current name is already in.
    Classified {
        path: PathBuf,
        forms: FormSet,
    },
    /// The name is already in the target form.
    Skipped {
        path: PathBuf,
        form: NormalizationForm,
    },
    /// Dry run: the file would be renamed.
    Target {
        path: PathBuf,
        from: FormSet,
        to: NormalizationForm,
        destination: PathBuf,
    },
    /// The file was renamed.
    Renamed {
        path: PathBuf,
        from: FormSet,
        to: NormalizationForm,
        destination: PathBuf,
    },
    /// The destination was taken by another file and the file was left alone.
    Conflict {
        path: PathBuf,
        destination: PathBuf,
    },
    /// The file could not be renamed; the run continues.
    Failed {
        path: PathBuf,
        error: String,
    },
    /// The name is not valid UTF-8 and cannot be normalized.
    Unsupported {
        path: PathBuf,
    },
    /// A recursive traversal finished.
    Summary(Summary),
}

impl Event {
    /// Returns `true` for events that end a file's processing.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Event::Skipped { .. }
                | Event::Target { .. }
                | Event::Renamed { .. }
                | Event::Conflict { .. }
                | Event::Failed { .. }
                | Event::Unsupported { .. }
        )
    }
}
