//! Error types for `unorm-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// Whether a variant is fatal depends on where it surfaces: root validation
/// and traversal errors abort a run, while errors raised while applying a
/// single rename are reported and the run moves on.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was given where only files are accepted.
    #[error("is a directory (use --recursive to descend into it): {0}")]
    IsADirectory(PathBuf),

    /// The requested normalization form is not one of NFC, NFD, NFKC, NFKD.
    #[error(
        "invalid normalization form '{0}': form should be one of 'NFC', 'NFD', 'NFKC', or 'NFKD'"
    )]
    InvalidForm(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The directory walk failed below a root.
    #[error("traversal failed at {path}: {message}")]
    Traversal { path: PathBuf, message: String },

    /// The rename target already exists and the conflict policy forbids replacing it.
    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub(crate) fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `unorm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
