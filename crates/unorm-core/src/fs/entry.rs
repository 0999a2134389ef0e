//! File entry representation.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// A single file discovered by the walker.
///
/// `FileEntry` is immutable. Its path is canonical: the containing
/// directory is fully resolved (symlinks followed, no `.` or `..`
/// components) while the final component is kept as found, so a symlink is
/// renamed as itself rather than through its target.
///
/// Unlike a full `realpath`, the final link is never resolved: a symlink
/// passed as a root renames the link, not the file it points to.
///
/// # Examples
///
/// ```no_run
/// use unorm_core::FileEntry;
/// use std::path::Path;
///
/// let entry = FileEntry::from_path(Path::new("./notes.txt")).unwrap();
/// assert!(entry.path().is_absolute());
/// assert_eq!(entry.name(), "notes.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    is_dir: bool,
    is_symlink: bool,
}

impl FileEntry {
    /// Creates a `FileEntry` from an already canonical path and its metadata.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        Self {
            path,
            is_dir: metadata.is_dir(),
            is_symlink: metadata.is_symlink(),
        }
    }

    /// Creates a `FileEntry` for `path`, canonicalizing it first.
    ///
    /// Metadata is read without following a final symlink.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the path does not exist.
    /// - [`CoreError::PermissionDenied`] if it cannot be inspected.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let canonical = canonical_path(path)?;
        let metadata =
            std::fs::symlink_metadata(&canonical).map_err(|e| CoreError::from_io(e, path))?;
        Ok(Self::new(canonical, &metadata))
    }

    /// Returns the canonical absolute path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the last component of the path, lossily decoded.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if this entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }
}

/// Resolves the parent directory of `path` and re-attaches its final component.
///
/// Paths without a usable final component (`/`, `..`) are canonicalized as a
/// whole.
pub fn canonical_path(path: &Path) -> CoreResult<PathBuf> {
    let resolve = |p: &Path| std::fs::canonicalize(p).map_err(|e| CoreError::from_io(e, path));

    match path.file_name() {
        Some(name) => {
            let parent = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            Ok(resolve(parent)?.join(name))
        }
        None => resolve(path),
    }
}
