//! Enumerating the files a run operates on.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// Checks that `root` can be processed before anything is renamed.
///
/// Files must be openable for reading. Directories are accepted only when
/// `recursive` is set, and must be listable.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if the path does not exist.
/// - [`CoreError::PermissionDenied`] if it cannot be opened or listed.
/// - [`CoreError::IsADirectory`] if a directory was given without `recursive`.
pub fn validate_root(root: &Path, recursive: bool) -> CoreResult<()> {
    let metadata = std::fs::metadata(root).map_err(|e| CoreError::from_io(e, root))?;

    if metadata.is_dir() {
        if !recursive {
            return Err(CoreError::IsADirectory(root.to_path_buf()));
        }
        std::fs::read_dir(root).map_err(|e| CoreError::from_io(e, root))?;
    } else {
        std::fs::File::open(root).map_err(|e| CoreError::from_io(e, root))?;
    }

    Ok(())
}

/// A one-shot sequence of [`FileEntry`] values.
///
/// Built with [`Walker::flat`] for explicit file arguments or
/// [`Walker::recursive`] for a directory tree. Directories are never
/// yielded. Iteration stops for good after the first error.
pub struct Walker {
    source: Source,
    seen: HashSet<PathBuf>,
    failed: bool,
}

enum Source {
    Flat(std::vec::IntoIter<PathBuf>),
    Tree(walkdir::IntoIter),
}

impl Walker {
    /// Yields each of `paths` in order, refusing directories.
    pub fn flat(paths: &[PathBuf]) -> Self {
        Self {
            source: Source::Flat(paths.to_vec().into_iter()),
            seen: HashSet::new(),
            failed: false,
        }
    }

    /// Yields every non-directory entry below `root`, depth first.
    ///
    /// Each directory is listed in full, sorted by file name, before its
    /// entries are handed out, so files renamed during the walk are not seen
    /// again under their new names. A symlinked `root` is followed; other
    /// symlinks are followed only when `follow_links` is set.
    pub fn recursive(root: &Path, follow_links: bool) -> Self {
        let walker = WalkDir::new(root)
            .follow_links(follow_links)
            .follow_root_links(true)
            .sort_by_file_name()
            .into_iter();

        Self {
            source: Source::Tree(walker),
            seen: HashSet::new(),
            failed: false,
        }
    }

    fn next_flat(paths: &mut std::vec::IntoIter<PathBuf>) -> Option<CoreResult<FileEntry>> {
        let path = paths.next()?;
        let entry = FileEntry::from_path(&path).and_then(|entry| {
            if entry.is_dir() {
                Err(CoreError::IsADirectory(path.clone()))
            } else {
                Ok(entry)
            }
        });
        Some(entry)
    }

    fn next_tree(walker: &mut walkdir::IntoIter) -> Option<CoreResult<FileEntry>> {
        loop {
            let dir_entry = match walker.next()? {
                Ok(e) => e,
                Err(e) => {
                    if let Some(link) = dangling_link(&e) {
                        tracing::debug!("dangling symlink {}", link.display());
                        return Some(FileEntry::from_path(link));
                    }
                    return Some(Err(traversal_error(e)));
                }
            };

            if dir_entry.file_type().is_dir() {
                tracing::debug!("descending into {}", dir_entry.path().display());
                continue;
            }

            return Some(FileEntry::from_path(dir_entry.path()));
        }
    }
}

impl Iterator for Walker {
    type Item = CoreResult<FileEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let next = match &mut self.source {
                Source::Flat(paths) => Self::next_flat(paths),
                Source::Tree(walker) => Self::next_tree(walker),
            }?;

            match next {
                Ok(entry) => {
                    if !self.seen.insert(entry.path().to_path_buf()) {
                        tracing::debug!("already visited {}", entry.path().display());
                        continue;
                    }
                    return Some(Ok(entry));
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Returns the link path when following a symlink failed because its
/// target is gone. Such a link is still a file to process.
fn dangling_link(err: &walkdir::Error) -> Option<&Path> {
    if err.loop_ancestor().is_some() {
        return None;
    }
    if err.io_error()?.kind() != std::io::ErrorKind::NotFound {
        return None;
    }
    let path = err.path()?;
    let metadata = std::fs::symlink_metadata(path).ok()?;
    metadata.file_type().is_symlink().then_some(path)
}

fn traversal_error(err: walkdir::Error) -> CoreError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let message = match (err.loop_ancestor(), err.io_error()) {
        (Some(ancestor), _) => format!("filesystem loop back to {}", ancestor.display()),
        (None, Some(io)) => io.to_string(),
        (None, None) => err.to_string(),
    };
    CoreError::Traversal { path, message }
}
