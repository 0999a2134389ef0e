//! Immutable settings for one run.

use crate::fs::ops::ConflictPolicy;
use crate::norm::form::NormalizationForm;

/// Everything the orchestrator needs to know about how to run.
///
/// Built once at startup from defaults, the config file and command-line
/// flags, then passed by reference. Nothing reads settings from anywhere
/// else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Target form every name is normalized into.
    pub form: NormalizationForm,
    /// Descend into directory roots.
    pub recursive: bool,
    /// Report what would change without renaming anything.
    pub dry_run: bool,
    pub on_conflict: ConflictPolicy,
    /// Follow symlinked directories below a root.
    pub follow_links: bool,
}
