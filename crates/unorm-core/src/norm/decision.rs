//! Deciding whether a file needs renaming and where it goes.

use crate::fs::path;
use crate::norm::form::{NormalizationForm, Normalizer};

/// The outcome of normalizing one file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDecision {
    pub source: String,
    pub destination: String,
    /// The normalized basename, as produced by the normalizer.
    ///
    /// Compatibility forms can turn a name into one containing a separator
    /// (U+FF0F becomes `/` under NFKC), so check this before renaming.
    pub name: String,
    /// `false` exactly when `destination == source`.
    pub changed: bool,
}

/// Computes the destination of `path` under `form`.
///
/// Only the basename is normalized; the directory part is kept byte for
/// byte. This never touches the filesystem.
pub fn decide<N: Normalizer + ?Sized>(
    path: &str,
    form: NormalizationForm,
    normalizer: &N,
) -> RenameDecision {
    let parts = path::split(path);
    let name = normalizer.normalize(form, parts.basename);
    let destination = parts.join(&name);
    let changed = destination != path;

    RenameDecision {
        source: path.to_string(),
        destination,
        name,
        changed,
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;
    use crate::norm::classify::classify;
    use crate::norm::form::UnicodeNormalizer;

    #[test]
    fn decomposed_name_to_nfc_is_changed() {
        let decision = decide(
            "/data/cafe\u{301}.txt",
            NormalizationForm::Nfc,
            &UnicodeNormalizer,
        );
        assert!(decision.changed);
        assert_eq!(decision.source, "/data/cafe\u{301}.txt");
        assert_eq!(decision.destination, "/data/caf\u{e9}.txt");
        assert_eq!(decision.name, "caf\u{e9}.txt");
        assert_eq!(decision.name.chars().count(), 8);
    }

    #[test]
    fn ascii_name_is_unchanged_for_every_form() {
        for form in NormalizationForm::ALL {
            let decision = decide("/data/cafe.txt", form, &UnicodeNormalizer);
            assert!(!decision.changed, "{form}");
            assert_eq!(decision.destination, decision.source);
        }
    }

    #[test]
    fn directory_part_is_never_rewritten() {
        let decision = decide(
            "/cafe\u{301}/cafe\u{301}.txt",
            NormalizationForm::Nfc,
            &UnicodeNormalizer,
        );
        assert_eq!(decision.destination, "/cafe\u{301}/caf\u{e9}.txt");
    }

    #[test]
    fn nfkc_can_produce_a_separator_in_the_name() {
        let decision = decide("/d/a\u{ff0f}b", NormalizationForm::Nfkc, &UnicodeNormalizer);
        assert!(decision.changed);
        assert_eq!(decision.name, "a/b");
        assert_eq!(decision.destination, "/d/a/b");
    }

    #[test]
    fn applying_decision_twice_is_a_no_op() {
        for form in NormalizationForm::ALL {
            let first = decide("/d/\u{fb01}cafe\u{301}", form, &UnicodeNormalizer);
            let second = decide(&first.destination, form, &UnicodeNormalizer);
            assert!(!second.changed, "{form}");
        }
    }

    #[test]
    fn unchanged_iff_classified_in_target_form() {
        let names = [
            "/d/cafe.txt",
            "/d/cafe\u{301}.txt",
            "/d/caf\u{e9}.txt",
            "/d/\u{fb01}le",
            "/d/caf\u{e9}-cafe\u{301}",
            "/d/\u{1100}\u{1161}",
            "/d/\u{ac00}",
        ];
        for name in names {
            let forms = classify(name, &UnicodeNormalizer);
            for form in NormalizationForm::ALL {
                let decision = decide(name, form, &UnicodeNormalizer);
                assert_eq!(!decision.changed, forms.contains(form), "{name:?} {form}");
            }
        }
    }
}
