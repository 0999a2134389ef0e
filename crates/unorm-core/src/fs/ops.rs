//! Applying renames on disk.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// What to do when a rename target already exists as a different file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Report the file as failed and leave both files alone.
    #[default]
    Fail,
    /// Leave both files alone and report the conflict as a warning.
    Skip,
    /// Replace the existing file.
    Overwrite,
}

impl ConflictPolicy {
    pub const ALL: [ConflictPolicy; 3] = [
        ConflictPolicy::Fail,
        ConflictPolicy::Skip,
        ConflictPolicy::Overwrite,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConflictPolicy::Fail => "fail",
            ConflictPolicy::Skip => "skip",
            ConflictPolicy::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConflictPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::ConfigParse(format!(
                    "invalid conflict policy '{s}': expected one of fail, skip, overwrite"
                ))
            })
    }
}

/// Result of a rename attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file now lives at the destination.
    Renamed,
    /// The destination was taken and [`ConflictPolicy::Skip`] left the file alone.
    Conflict,
}

/// Renames `source` to `destination`, honouring `policy` when the
/// destination already exists.
///
/// A destination that resolves to the same file as the source is not a
/// conflict: normalization-insensitive filesystems (APFS, HFS+) report the
/// composed and decomposed spellings of a name as one file.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `source` does not exist.
/// - [`CoreError::DestinationExists`] if the destination is taken and
///   `policy` is [`ConflictPolicy::Fail`].
/// - [`CoreError::PermissionDenied`] or [`CoreError::Io`] if the rename fails.
pub fn apply_rename(
    source: &Path,
    destination: &Path,
    policy: ConflictPolicy,
) -> CoreResult<RenameOutcome> {
    let source_meta =
        std::fs::symlink_metadata(source).map_err(|e| CoreError::from_io(e, source))?;

    match std::fs::symlink_metadata(destination) {
        Ok(dest_meta) if !same_file(source, &source_meta, destination, &dest_meta) => {
            match policy {
                ConflictPolicy::Fail => {
                    return Err(CoreError::DestinationExists(destination.to_path_buf()))
                }
                ConflictPolicy::Skip => return Ok(RenameOutcome::Conflict),
                ConflictPolicy::Overwrite => {
                    tracing::debug!("overwriting {}", destination.display());
                }
            }
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(CoreError::from_io(e, destination)),
    }

    std::fs::rename(source, destination).map_err(|e| CoreError::from_io(e, source))?;

    Ok(RenameOutcome::Renamed)
}

/// Returns `true` if `name` can be used as a single path component.
pub fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}

#[cfg(unix)]
fn same_file(
    _a: &Path,
    a_meta: &std::fs::Metadata,
    _b: &Path,
    b_meta: &std::fs::Metadata,
) -> bool {
    use std::os::unix::fs::MetadataExt;
    a_meta.dev() == b_meta.dev() && a_meta.ino() == b_meta.ino()
}

#[cfg(not(unix))]
fn same_file(
    a: &Path,
    _a_meta: &std::fs::Metadata,
    b: &Path,
    _b_meta: &std::fs::Metadata,
) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
