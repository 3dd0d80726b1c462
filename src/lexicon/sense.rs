//! Sense and synset handle types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::pos::PartOfSpeech;

/// Opaque handle to a synset within a lexical source.
///
/// Handles are only meaningful to the source that issued them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SynsetId(pub u32);

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "synset#{}", self.0)
    }
}

/// One sense of a term: a lemma paired with the synset expressing one of its
/// meanings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sense {
    /// Canonical written form, underscores joining multi-word lemmas
    pub lemma: String,
    /// Category of the synset
    pub pos: PartOfSpeech,
    /// The synset expressing this meaning
    pub synset: SynsetId,
}

impl Sense {
    /// Create a new sense.
    pub fn new<S: Into<String>>(lemma: S, pos: PartOfSpeech, synset: SynsetId) -> Self {
        Sense {
            lemma: lemma.into(),
            pos,
            synset,
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.lemma, self.pos, self.synset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let sense = Sense::new("dog", PartOfSpeech::Noun, SynsetId(7));
        assert_eq!(sense.to_string(), "dog (noun, synset#7)");
    }
}
