//! Sense resolution against the lexical backend.
//!
//! The resolver turns a lookup term into an explicit [`Resolution`]: matched
//! when the backend returned any sense for the term, carrying the subset
//! that survived category filtering and the truncation bound (possibly
//! none), or no match when the backend returned nothing. "No match" is a
//! routine outcome, not an error; backend failures stay in the `Result`
//! channel.
//!
//! # Examples
//!
//! ```
//! use lexnet::enrich::resolver::{Resolution, Resolver};
//! use lexnet::lexicon::memory::MemoryLexicon;
//! use lexnet::lexicon::pos::PartOfSpeech;
//!
//! let mut lexicon = MemoryLexicon::new();
//! lexicon.add_synset(PartOfSpeech::Noun, "a domesticated canid", &["dog"]);
//!
//! let resolver = Resolver::new(&lexicon, true, 4);
//! let resolution = resolver.resolve("dog", PartOfSpeech::Noun).unwrap();
//! assert!(matches!(resolution, Resolution::Matched(_)));
//!
//! let resolution = resolver.resolve("cat", PartOfSpeech::Noun).unwrap();
//! assert_eq!(resolution, Resolution::NoMatch);
//! ```

use crate::error::Result;
use crate::lexicon::pos::PartOfSpeech;
use crate::lexicon::sense::Sense;
use crate::lexicon::source::LexicalSource;

/// Outcome of resolving one lookup term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The backend knew the term. Senses that survived filtering and the
    /// bound, in backend order; empty when every sense was discarded.
    Matched(Vec<Sense>),
    /// The backend returned nothing for the term
    NoMatch,
}

impl Resolution {
    /// Check if the backend knew the term.
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }
}

/// Resolves lookup terms into accepted senses.
pub struct Resolver<'a> {
    source: &'a dyn LexicalSource,
    match_pos: bool,
    truncate: usize,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a lexical source.
    ///
    /// `match_pos` controls strict category filtering on the unconstrained
    /// path; `truncate` bounds the number of accepted senses (0 accepts
    /// nothing).
    pub fn new(source: &'a dyn LexicalSource, match_pos: bool, truncate: usize) -> Self {
        Resolver {
            source,
            match_pos,
            truncate,
        }
    }

    /// Resolve a term through the unconstrained lookup path.
    ///
    /// With strict matching enabled, senses whose category disagrees with
    /// `hint` are discarded without counting toward the truncation bound.
    /// A term the backend knows resolves to `Matched` even when every sense
    /// is discarded.
    pub fn resolve(&self, term: &str, hint: PartOfSpeech) -> Result<Resolution> {
        let senses = self.source.lookup(term)?;
        if senses.is_empty() {
            return Ok(Resolution::NoMatch);
        }
        let mut accepted = Vec::new();
        for sense in senses {
            if self.match_pos && sense.pos != hint {
                continue;
            }
            if accepted.len() == self.truncate {
                break;
            }
            accepted.push(sense);
        }
        Ok(Resolution::Matched(accepted))
    }

    /// Resolve a term through the category-constrained lookup path.
    ///
    /// The backend already restricted the senses, so they are accepted
    /// as-is up to the truncation bound.
    pub fn resolve_pos(&self, term: &str, pos: PartOfSpeech) -> Result<Resolution> {
        let mut accepted = self.source.lookup_pos(term, pos)?;
        if accepted.is_empty() {
            return Ok(Resolution::NoMatch);
        }
        accepted.truncate(self.truncate);
        Ok(Resolution::Matched(accepted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::memory::MemoryLexicon;

    fn lexicon_with_mixed_pos() -> MemoryLexicon {
        let mut lexicon = MemoryLexicon::new();
        lexicon.add_synset(PartOfSpeech::Noun, "sense one", &["run"]);
        lexicon.add_synset(PartOfSpeech::Verb, "sense two", &["run"]);
        lexicon.add_synset(PartOfSpeech::Verb, "sense three", &["run"]);
        lexicon.add_synset(PartOfSpeech::Verb, "sense four", &["run"]);
        lexicon
    }

    #[test]
    fn test_strict_pos_discards_without_counting() {
        let lexicon = lexicon_with_mixed_pos();
        let resolver = Resolver::new(&lexicon, true, 2);
        let resolution = resolver.resolve("run", PartOfSpeech::Verb).unwrap();
        match resolution {
            Resolution::Matched(senses) => {
                // The noun sense is skipped; two verb senses fill the bound.
                assert_eq!(senses.len(), 2);
                assert!(senses.iter().all(|s| s.pos == PartOfSpeech::Verb));
            }
            Resolution::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_lenient_accepts_any_pos() {
        let lexicon = lexicon_with_mixed_pos();
        let resolver = Resolver::new(&lexicon, false, 10);
        let resolution = resolver.resolve("run", PartOfSpeech::Adverb).unwrap();
        match resolution {
            Resolution::Matched(senses) => assert_eq!(senses.len(), 4),
            Resolution::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_truncate_zero_accepts_no_senses() {
        let lexicon = lexicon_with_mixed_pos();
        let resolver = Resolver::new(&lexicon, true, 0);
        // The term still counts as matched; the bound just empties the list.
        let resolution = resolver.resolve("run", PartOfSpeech::Verb).unwrap();
        assert_eq!(resolution, Resolution::Matched(Vec::new()));
    }

    #[test]
    fn test_known_term_matches_even_when_filtering_discards_all() {
        let lexicon = lexicon_with_mixed_pos();
        let resolver = Resolver::new(&lexicon, true, 4);
        let resolution = resolver.resolve("run", PartOfSpeech::Adverb).unwrap();
        assert_eq!(resolution, Resolution::Matched(Vec::new()));
        assert!(resolution.is_match());

        let resolution = resolver.resolve("walk", PartOfSpeech::Verb).unwrap();
        assert_eq!(resolution, Resolution::NoMatch);
    }

    #[test]
    fn test_constrained_path() {
        let lexicon = lexicon_with_mixed_pos();
        let resolver = Resolver::new(&lexicon, true, 2);
        let resolution = resolver.resolve_pos("run", PartOfSpeech::Verb).unwrap();
        match resolution {
            Resolution::Matched(senses) => assert_eq!(senses.len(), 2),
            Resolution::NoMatch => panic!("expected a match"),
        }
        assert_eq!(
            resolver.resolve_pos("run", PartOfSpeech::Adjective).unwrap(),
            Resolution::NoMatch
        );
    }
}
