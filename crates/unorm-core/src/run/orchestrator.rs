//! Driving a run: walk, classify, decide, rename, count.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::event::Event;
use crate::fs::entry::FileEntry;
use crate::fs::ops::{self, RenameOutcome};
use crate::fs::walk::{self, Walker};
use crate::norm::classify::classify;
use crate::norm::decision::decide;
use crate::norm::form::{Normalizer, UnicodeNormalizer};
use crate::run::counters::{FileOutcome, RunCounters, RunReport, Summary};
use crate::run::options::RunOptions;

/// Runs over `roots` with the default Unicode normalizer.
///
/// See [`Orchestrator::run`].
pub fn run<F>(roots: &[PathBuf], options: &RunOptions, on_event: F) -> CoreResult<RunReport>
where
    F: FnMut(Event),
{
    Orchestrator::new(options, &UnicodeNormalizer).run(roots, on_event)
}

/// Drives one invocation over a set of roots.
pub struct Orchestrator<'a, N: Normalizer + ?Sized> {
    options: &'a RunOptions,
    normalizer: &'a N,
}

impl<'a, N: Normalizer + ?Sized> Orchestrator<'a, N> {
    pub fn new(options: &'a RunOptions, normalizer: &'a N) -> Self {
        Self {
            options,
            normalizer,
        }
    }

    /// Processes every file under `roots`, reporting progress through `on_event`.
    ///
    /// All roots are validated before anything is renamed. Without
    /// `recursive` each root must be a file and is handled on its own, with
    /// no summary. With `recursive` each root gets its own walk, its own
    /// counters and one [`Event::Summary`].
    ///
    /// Failing to rename a single file is reported as [`Event::Failed`] and
    /// the run continues.
    ///
    /// # Errors
    ///
    /// Returns the first root validation or traversal error. The run stops
    /// there and no summary is emitted for the root being walked.
    pub fn run<F>(&self, roots: &[PathBuf], mut on_event: F) -> CoreResult<RunReport>
    where
        F: FnMut(Event),
    {
        for root in roots {
            walk::validate_root(root, self.options.recursive)?;
        }

        let mut report = RunReport::default();

        if !self.options.recursive {
            for entry in Walker::flat(roots) {
                let entry = entry?;
                self.process(&entry, &mut on_event);
            }
            return Ok(report);
        }

        for root in roots {
            let counters = self.walk_root(root, &mut on_event)?;
            let summary = Summary {
                root: root.clone(),
                counters,
                dry_run: self.options.dry_run,
            };
            tracing::debug!(
                "finished {}: {} files, {} changed",
                root.display(),
                counters.total_files,
                counters.changed_files
            );
            on_event(Event::Summary(summary.clone()));
            report.summaries.push(summary);
        }

        Ok(report)
    }

    fn walk_root<F>(&self, root: &Path, on_event: &mut F) -> CoreResult<RunCounters>
    where
        F: FnMut(Event),
    {
        let mut counters = RunCounters::default();
        for entry in Walker::recursive(root, self.options.follow_links) {
            let entry = entry?;
            counters.record(self.process(&entry, on_event));
        }
        Ok(counters)
    }

    /// Takes one file from discovery to a terminal state.
    fn process<F>(&self, entry: &FileEntry, on_event: &mut F) -> FileOutcome
    where
        F: FnMut(Event),
    {
        let path = entry.path().to_path_buf();
        on_event(Event::Entry {
            path: path.clone(),
            is_symlink: entry.is_symlink(),
        });

        let Some(text) = entry.path().to_str() else {
            tracing::debug!("skipping non UTF-8 name: {}", entry.name());
            on_event(Event::Unsupported { path });
            return FileOutcome::Unsupported;
        };

        let forms = classify(text, self.normalizer);
        on_event(Event::Classified {
            path: path.clone(),
            forms,
        });

        let form = self.options.form;
        let decision = decide(text, form, self.normalizer);
        if !decision.changed {
            on_event(Event::Skipped { path, form });
            return FileOutcome::Skipped;
        }

        if !ops::is_valid_filename(&decision.name) {
            let error = format!("normalized name is not a valid file name: {:?}", decision.name);
            on_event(Event::Failed { path, error });
            return FileOutcome::Failed;
        }

        let destination = PathBuf::from(decision.destination);
        if self.options.dry_run {
            on_event(Event::Target {
                path,
                from: forms,
                to: form,
                destination,
            });
            return FileOutcome::WouldRename;
        }

        match ops::apply_rename(&path, &destination, self.options.on_conflict) {
            Ok(RenameOutcome::Renamed) => {
                on_event(Event::Renamed {
                    path,
                    from: forms,
                    to: form,
                    destination,
                });
                FileOutcome::Renamed
            }
            Ok(RenameOutcome::Conflict) => {
                on_event(Event::Conflict { path, destination });
                FileOutcome::Conflict
            }
            Err(e) => {
                tracing::debug!("rename failed for {}: {e}", path.display());
                on_event(Event::Failed {
                    path,
                    error: describe(&e),
                });
                FileOutcome::Failed
            }
        }
    }
}

fn describe(err: &CoreError) -> String {
    match err {
        CoreError::Io(io) => format!("I/O error: {io}"),
        other => other.to_string(),
    }
}
