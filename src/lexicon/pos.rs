//! Part-of-speech categories and tag mapping.
//!
//! Lexical knowledge bases index senses under four open-class categories.
//! Annotated corpora usually carry finer-grained tags (Penn Treebank style),
//! so this module also maps tag prefixes onto the four categories.
//!
//! # Examples
//!
//! ```
//! use lexnet::lexicon::pos::PartOfSpeech;
//!
//! assert_eq!(PartOfSpeech::from_tag("NNS"), PartOfSpeech::Noun);
//! assert_eq!(PartOfSpeech::from_tag("VBZ"), PartOfSpeech::Verb);
//! assert_eq!(PartOfSpeech::from_tag("XYZ"), PartOfSpeech::Noun);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four open-class part-of-speech categories of the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    /// Nouns
    Noun,
    /// Verbs
    Verb,
    /// Adjectives
    Adjective,
    /// Adverbs
    Adverb,
}

/// Tag prefixes mapped onto lexicon categories, Penn Treebank style.
const TAG_PREFIXES: &[(&str, PartOfSpeech)] = &[
    ("NN", PartOfSpeech::Noun),
    ("VB", PartOfSpeech::Verb),
    ("JJ", PartOfSpeech::Adjective),
    ("RB", PartOfSpeech::Adverb),
];

impl PartOfSpeech {
    /// All categories, in lexicon order.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Map a part-of-speech tag onto a category by prefix.
    ///
    /// Tags that match no prefix (including the empty tag) default to
    /// [`PartOfSpeech::Noun`], the category with the broadest lexicon
    /// coverage.
    pub fn from_tag(tag: &str) -> PartOfSpeech {
        TAG_PREFIXES
            .iter()
            .find(|(prefix, _)| tag.starts_with(prefix))
            .map(|(_, pos)| *pos)
            .unwrap_or(PartOfSpeech::Noun)
    }

    /// The lowercase name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
