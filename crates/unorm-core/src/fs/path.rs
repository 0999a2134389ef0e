//! Splitting paths into directory and basename on separator boundaries.
//!
//! This works on the path text only. Nothing here touches the filesystem or
//! checks that a path is legal.

use std::path::MAIN_SEPARATOR;

/// A path split at its last separator.
///
/// `directory + separator + basename` rebuilds the original path, except
/// when the path had no separator, in which case `directory` is `"."` and
/// `separator` is the platform's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParts<'a> {
    pub directory: &'a str,
    pub basename: &'a str,
    pub separator: char,
}

impl<'a> PathParts<'a> {
    /// Builds `directory + separator + name`.
    pub fn join(&self, name: &str) -> String {
        let mut out =
            String::with_capacity(self.directory.len() + self.separator.len_utf8() + name.len());
        out.push_str(self.directory);
        out.push(self.separator);
        out.push_str(name);
        out
    }
}

/// Splits `path` into `(directory, basename)` at the last separator.
pub fn split(path: &str) -> PathParts<'_> {
    match last_separator(path) {
        Some(idx) => PathParts {
            directory: &path[..idx],
            basename: &path[idx + 1..],
            separator: char::from(path.as_bytes()[idx]),
        },
        None => PathParts {
            directory: ".",
            basename: path,
            separator: MAIN_SEPARATOR,
        },
    }
}

#[cfg(not(windows))]
fn last_separator(path: &str) -> Option<usize> {
    path.rfind('/')
}

// Windows accepts both separators; whichever comes last wins.
#[cfg(windows)]
fn last_separator(path: &str) -> Option<usize> {
    path.rfind(['\\', '/'])
}
