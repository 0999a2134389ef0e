//! Normalization of file names.
//!
//! [`form`] holds the four forms and the [`form::Normalizer`] seam,
//! [`classify`] reports which forms a name is already in, and [`decision`]
//! computes where a file would be renamed to.

pub mod classify;
pub mod decision;
pub mod form;

pub use classify::classify;
pub use decision::{decide, RenameDecision};
pub use form::{FormSet, NormalizationForm, Normalizer, UnicodeNormalizer};
