//! unicode-norm core library: rename files into a Unicode normalization form.
//!
//! `unorm-core` holds everything except the command line: walking the input
//! roots, working out which normalization forms a file name is in, deciding
//! where it should be renamed to, and applying (or simulating) the rename
//! while counting what happened. Progress is reported as [`Event`]s so any
//! frontend can present it.
//!
//! # Modules
//!
//! - [`norm`]: Normalization forms, the [`Normalizer`] seam, classification and rename decisions.
//! - [`fs`]: Path splitting, [`FileEntry`], the [`Walker`], and rename application.
//! - [`run`]: The [`Orchestrator`], [`RunOptions`] and per-traversal counters.
//! - [`config`]: TOML-based defaults ([`Config`]).
//! - [`event`]: Core → frontend notifications.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod norm;
pub mod run;

pub use config::settings::{Config, CONFIG_ENV_VAR};
pub use error::{CoreError, CoreResult};
pub use event::Event;
pub use fs::entry::FileEntry;
pub use fs::{apply_rename, ConflictPolicy, RenameOutcome, Walker};
pub use norm::{
    classify, decide, FormSet, NormalizationForm, Normalizer, RenameDecision, UnicodeNormalizer,
};
pub use run::{run, Orchestrator, RunCounters, RunOptions, RunReport, Summary};
