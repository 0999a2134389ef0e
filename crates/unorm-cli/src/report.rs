//! Turning core events into log lines.

use tracing::{debug, error, info, warn};
use unorm_core::{Event, RunCounters, RunReport, Summary};

/// Logs each [`Event`] as one line.
pub struct Reporter {
    /// Prefix summaries with their root when several roots are walked.
    label_roots: bool,
}

impl Reporter {
    pub fn new(root_count: usize) -> Self {
        Self {
            label_roots: root_count > 1,
        }
    }

    pub fn handle(&self, event: &Event) {
        match event {
            Event::Entry { path, is_symlink } => {
                let kind = if *is_symlink { "symlink" } else { "file" };
                debug!("File entry: {} ({kind})", path.display());
            }
            Event::Classified { path, forms } => {
                debug!("File is in form of {forms}: {}", path.display());
            }
            Event::Skipped { path, form } => {
                info!("[SKIP] file name already in {form} form: {}", path.display());
            }
            Event::Target { path, from, to, .. } => {
                info!(
                    "[TARGET] This file will be renamed from {from} form to {to} form: {}",
                    path.display()
                );
            }
            Event::Renamed { path, from, to, .. } => {
                info!(
                    "[SUCCESS] Successfully renamed from {from} form to {to} form: {}",
                    path.display()
                );
            }
            Event::Conflict { path, destination } => {
                warn!(
                    "[CONFLICT] {} already exists, leaving file unchanged: {}",
                    destination.display(),
                    path.display()
                );
            }
            Event::Failed { path, error } => {
                error!("[FAILED] {error}: {}", path.display());
            }
            Event::Unsupported { path } => {
                warn!("[UNSUPPORTED] file name is not valid UTF-8: {}", path.display());
            }
            Event::Summary(summary) => {
                info!("{}", summary_line(summary, self.label_roots));
            }
        }
    }

    /// Logs the combined totals once every root has been walked.
    pub fn finish(&self, report: &RunReport, dry_run: bool) {
        if let Some(line) = totals_line(report, dry_run) {
            info!("{line}");
        }
    }
}

/// Formats the end-of-walk totals.
pub fn summary_line(summary: &Summary, with_root: bool) -> String {
    let counts = counts_line(&summary.counters, summary.dry_run);
    if with_root {
        format!("{}: {counts}", summary.root.display())
    } else {
        counts
    }
}

/// Formats the totals across all roots, or `None` when there is at most one
/// summary to add up.
pub fn totals_line(report: &RunReport, dry_run: bool) -> Option<String> {
    if report.summaries.len() < 2 {
        return None;
    }
    Some(format!(
        "All roots: {}",
        counts_line(&report.totals(), dry_run)
    ))
}

fn counts_line(counters: &RunCounters, dry_run: bool) -> String {
    let changed_label = if dry_run {
        "Files that would be updated"
    } else {
        "Updated files"
    };

    let mut line = format!(
        "Total files: {}, {changed_label}: {}",
        counters.total_files, counters.changed_files
    );
    if counters.failed_files > 0 {
        line.push_str(&format!(", Failed: {}", counters.failed_files));
    }
    line
}
