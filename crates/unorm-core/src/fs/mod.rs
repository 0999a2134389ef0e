//! File system side of a run.
//!
//! [`path`] splits path text, [`entry::FileEntry`] represents a discovered
//! file, [`walk::Walker`] enumerates files from the command-line roots, and
//! [`ops::apply_rename`] performs a rename under a [`ops::ConflictPolicy`].

pub mod entry;
pub mod ops;
pub mod path;
pub mod walk;

pub use ops::{apply_rename, is_valid_filename, ConflictPolicy, RenameOutcome};
pub use path::{split, PathParts};
pub use walk::{validate_root, Walker};
