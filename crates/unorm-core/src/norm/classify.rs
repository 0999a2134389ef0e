//! Detecting which normalization forms a file name is already in.

use crate::fs::path;
use crate::norm::form::{FormSet, NormalizationForm, Normalizer};

/// Returns every form whose normalization leaves the basename of `path` unchanged.
///
/// A name can be a fixed point of several forms at once (pure ASCII names
/// are in all four), or of none. An empty set means the form is unknown.
pub fn classify<N: Normalizer + ?Sized>(path: &str, normalizer: &N) -> FormSet {
    let name = path::split(path).basename;
    NormalizationForm::ALL
        .into_iter()
        .filter(|form| normalizer.normalize(*form, name) == name)
        .collect()
}
