//! Normalization forms and the normalizer seam.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;

/// One of the four Unicode normalization forms.
///
/// Chosen once per run; every file is normalized into the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NormalizationForm {
    /// Canonical composition.
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

type NormalizeFn = fn(&str) -> String;

/// Indexed by `NormalizationForm as usize`.
const STRATEGIES: [(NormalizationForm, &str, NormalizeFn); 4] = [
    (NormalizationForm::Nfc, "NFC", to_nfc),
    (NormalizationForm::Nfd, "NFD", to_nfd),
    (NormalizationForm::Nfkc, "NFKC", to_nfkc),
    (NormalizationForm::Nfkd, "NFKD", to_nfkd),
];

fn to_nfc(s: &str) -> String {
    s.nfc().collect()
}

fn to_nfd(s: &str) -> String {
    s.nfd().collect()
}

fn to_nfkc(s: &str) -> String {
    s.nfkc().collect()
}

fn to_nfkd(s: &str) -> String {
    s.nfkd().collect()
}

impl NormalizationForm {
    /// All forms in canonical order: NFC, NFD, NFKC, NFKD.
    pub const ALL: [NormalizationForm; 4] = [
        NormalizationForm::Nfc,
        NormalizationForm::Nfd,
        NormalizationForm::Nfkc,
        NormalizationForm::Nfkd,
    ];

    /// Returns the upper-case name, e.g. `"NFKC"`.
    pub fn name(self) -> &'static str {
        STRATEGIES[self as usize].1
    }

    /// Normalizes `text` into this form.
    pub fn apply(self, text: &str) -> String {
        (STRATEGIES[self as usize].2)(text)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormalizationForm {
    type Err = CoreError;

    /// Parses a form name, ignoring ASCII case (`nfc` and `NFC` are equal).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STRATEGIES
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(form, _, _)| *form)
            .ok_or_else(|| CoreError::InvalidForm(s.to_string()))
    }
}

/// The normalization primitive used by classification and rename decisions.
///
/// The engine never normalizes text directly; it always goes through this
/// trait so the algorithm can be swapped (or faked in tests).
pub trait Normalizer {
    /// Returns `text` normalized into `form`.
    fn normalize(&self, form: NormalizationForm, text: &str) -> String;
}

/// [`Normalizer`] backed by the `unicode-normalization` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizer;

impl Normalizer for UnicodeNormalizer {
    fn normalize(&self, form: NormalizationForm, text: &str) -> String {
        form.apply(text)
    }
}

/// A set of normalization forms.
///
/// Iterates and displays in canonical order. An empty set displays as
/// `UNKNOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FormSet(u8);

impl FormSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// The set of all four forms.
    pub fn all() -> Self {
        NormalizationForm::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, form: NormalizationForm) {
        self.0 |= form.bit();
    }

    pub fn contains(&self, form: NormalizationForm) -> bool {
        self.0 & form.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = NormalizationForm> + '_ {
        NormalizationForm::ALL
            .into_iter()
            .filter(move |form| self.contains(*form))
    }
}

impl FromIterator<NormalizationForm> for FormSet {
    fn from_iter<I: IntoIterator<Item = NormalizationForm>>(iter: I) -> Self {
        let mut set = FormSet::empty();
        for form in iter {
            set.insert(form);
        }
        set
    }
}

impl fmt::Display for FormSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("UNKNOWN");
        }
        for (i, form) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(form.name())?;
        }
        Ok(())
    }
}
