//! Text normalization producing matching keys.

use crate::tables;

/// Normalized matching key: equivalence-class characters substituted,
/// punctuation folded to one script, whitespace removed, case folded.
///
/// Used only for comparison and indexing, never for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalForm(String);

impl CanonicalForm {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fold a raw string to its canonical matching form.
///
/// Steps, in order: character-equivalence substitution, full-width
/// punctuation folding, whitespace removal (internal included), case
/// folding. The result is a fixpoint: normalizing twice yields the same
/// form.
pub fn normalize(raw: &str) -> CanonicalForm {
    let mut folded = String::with_capacity(raw.len());
    for ch in raw.chars() {
        let ch = fold_equivalent(ch);
        let ch = fold_punctuation(ch);
        if ch.is_whitespace() {
            continue;
        }
        for lower in ch.to_lowercase() {
            folded.push(lower);
        }
    }
    CanonicalForm(folded)
}

fn fold_equivalent(ch: char) -> char {
    tables::CHAR_EQUIVALENCES
        .iter()
        .find(|(variant, _)| *variant == ch)
        .map_or(ch, |(_, canonical)| *canonical)
}

fn fold_punctuation(ch: char) -> char {
    tables::PUNCTUATION_FOLDS
        .iter()
        .find(|(wide, _)| *wide == ch)
        .map_or(ch, |(_, narrow)| *narrow)
}
