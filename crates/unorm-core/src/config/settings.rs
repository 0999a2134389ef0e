//! Run defaults loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fs::ops::ConflictPolicy;
use crate::norm::form::NormalizationForm;
use crate::run::options::RunOptions;

/// Environment variable naming a config file to load when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "UNICODE_NORM_CONFIG";

/// Top-level configuration.
///
/// Every field has a default so the tool works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rename: RenameConfig,
    #[serde(default)]
    pub walk: WalkConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed or names an
    ///   unknown form or policy.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Converts to run options. Dry-run is never read from a file.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            form: self.rename.form,
            recursive: self.walk.recursive,
            dry_run: false,
            on_conflict: self.rename.on_conflict,
            follow_links: self.walk.follow_links,
        }
    }
}

/// How names are rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenameConfig {
    #[serde(default)]
    pub form: NormalizationForm,
    #[serde(default)]
    pub on_conflict: ConflictPolicy,
}

/// How roots are traversed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub follow_links: bool,
}
