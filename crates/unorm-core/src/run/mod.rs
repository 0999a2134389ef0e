//! Running a normalization pass over a set of roots.

pub mod counters;
pub mod options;
pub mod orchestrator;

pub use counters::{FileOutcome, RunCounters, RunReport, Summary};
pub use options::RunOptions;
pub use orchestrator::{run, Orchestrator};
