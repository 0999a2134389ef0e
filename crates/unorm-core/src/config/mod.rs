//! Configuration management for unicode-norm.
//!
//! Defaults for a run ([`settings::Config`]) can be stored in a TOML file
//! and are merged with command-line flags at startup.

pub mod settings;
