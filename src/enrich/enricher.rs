//! The enrichment engine.
//!
//! An [`Enricher`] is built once from a configuration and a lexical
//! knowledge source, then applied to any number of documents. Each call
//! walks the configured input selectors, extracts candidate spans, matches
//! them against the source, and writes relation features back onto the
//! document, returning counters describing what happened.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexnet::annotation::document::Document;
//! use lexnet::annotation::feature::features;
//! use lexnet::enrich::config::EnricherConfig;
//! use lexnet::enrich::enricher::Enricher;
//! use lexnet::lexicon::memory::MemoryLexicon;
//! use lexnet::lexicon::pos::PartOfSpeech;
//!
//! # fn main() -> lexnet::error::Result<()> {
//! let mut lexicon = MemoryLexicon::new();
//! lexicon.add_synset(PartOfSpeech::Noun, "a domesticated canid", &["dog", "canine"]);
//!
//! let config = EnricherConfig {
//!     input_types: vec!["Mention".to_string()],
//!     min_word_length: 3,
//!     ..EnricherConfig::default()
//! };
//! let enricher = Enricher::new(config, Arc::new(lexicon))?;
//!
//! let mut doc = Document::new("the dog barked");
//! doc.annotation_set_mut("")
//!     .add("Mention", 4, 7, features([("string", "dog")]));
//!
//! let stats = enricher.enrich(&mut doc)?;
//! assert_eq!(stats.spans_matched, 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::annotation::document::Document;
use crate::annotation::selector::TypeSelector;
use crate::enrich::candidate;
use crate::enrich::config::EnricherConfig;
use crate::enrich::matcher::{self, MatchContext};
use crate::enrich::shaper::OutputTarget;
use crate::error::{LexnetError, Result};
use crate::lexicon::source::LexicalSource;

/// Counters for one enrichment run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichStats {
    /// Spans enumerated by the input selectors
    pub spans_examined: usize,
    /// Spans dropped by the exclusion filters
    pub spans_excluded: usize,
    /// Spans dropped by the minimum term length gate
    pub spans_below_length: usize,
    /// Spans for which at least one lookup hit the knowledge source
    pub spans_matched: usize,
    /// Lookups issued against the knowledge source
    pub lookups: usize,
    /// Lookups or aggregations that failed and were skipped
    pub lookup_failures: usize,
    /// Senses accepted and aggregated
    pub senses_accepted: usize,
    /// Annotations created in the output set
    pub annotations_created: usize,
    /// Feature values written
    pub features_written: usize,
}

/// Compiled matching state, absent when the engine is disabled.
struct Active {
    source: Arc<dyn LexicalSource>,
    selectors: Vec<TypeSelector>,
    create: Option<OutputTarget>,
    word_split: Regex,
    whitespace: Regex,
}

/// The enrichment engine.
///
/// Construction compiles the configuration once; enrichment itself keeps no
/// engine-level mutable state, so one engine can serve documents from
/// multiple threads.
pub struct Enricher {
    config: EnricherConfig,
    active: Option<Active>,
}

impl Enricher {
    /// Build an engine from a configuration and a knowledge source.
    ///
    /// Malformed input selectors are logged and dropped so one bad entry
    /// cannot silence the others. A malformed output selector is an error:
    /// created spans have to go somewhere well defined.
    pub fn new(config: EnricherConfig, source: Arc<dyn LexicalSource>) -> Result<Enricher> {
        let mut selectors = Vec::new();
        for entry in &config.input_types {
            match TypeSelector::parse(entry) {
                Ok(selector) => selectors.push(selector),
                Err(e) => warn!("ignoring input selector '{entry}': {e}"),
            }
        }
        let create = match &config.output_type {
            Some(text) => Some(OutputTarget::parse(text)?),
            None => None,
        };
        let word_split = Regex::new(r"\W+")
            .map_err(|e| LexnetError::config(format!("invalid word split pattern: {e}")))?;
        let whitespace = Regex::new(r"\s+")
            .map_err(|e| LexnetError::config(format!("invalid whitespace pattern: {e}")))?;
        Ok(Enricher {
            config,
            active: Some(Active {
                source,
                selectors,
                create,
                word_split,
                whitespace,
            }),
        })
    }

    /// Build a disabled engine.
    ///
    /// Hosts whose knowledge source failed to initialize can keep the
    /// pipeline wired up; enrichment becomes a logged no-op.
    pub fn disabled(config: EnricherConfig) -> Enricher {
        Enricher {
            config,
            active: None,
        }
    }

    /// Whether this engine was built without a knowledge source.
    pub fn is_disabled(&self) -> bool {
        self.active.is_none()
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &EnricherConfig {
        &self.config
    }

    /// Enrich one document in place.
    pub fn enrich(&self, doc: &mut Document) -> Result<EnrichStats> {
        let Some(active) = &self.active else {
            warn!("enrichment engine is disabled, leaving document untouched");
            return Ok(EnrichStats::default());
        };
        let mut stats = EnrichStats::default();
        let ctx = MatchContext {
            config: &self.config,
            source: active.source.as_ref(),
            create: active.create.as_ref(),
            word_split: &active.word_split,
            whitespace: &active.whitespace,
        };
        for selector in &active.selectors {
            let candidates = candidate::extract(doc, &self.config, selector, &mut stats);
            for candidate in &candidates {
                matcher::match_candidate(&ctx, doc, candidate, &mut stats);
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::feature::features;
    use crate::lexicon::memory::MemoryLexicon;
    use crate::lexicon::pos::PartOfSpeech;
    use crate::lexicon::relation::SemanticRelation;

    fn lexicon() -> Arc<MemoryLexicon> {
        let mut lexicon = MemoryLexicon::new();
        let dog =
            lexicon.add_synset(PartOfSpeech::Noun, "a domesticated canid", &["dog", "canine"]);
        let animal = lexicon.add_synset(PartOfSpeech::Noun, "a living creature", &["animal"]);
        let puppy = lexicon.add_synset(PartOfSpeech::Noun, "a young dog", &["puppy"]);
        lexicon
            .add_relation(dog, SemanticRelation::Hypernym, animal)
            .unwrap();
        lexicon
            .add_relation(dog, SemanticRelation::Hyponym, puppy)
            .unwrap();
        Arc::new(lexicon)
    }

    fn annotated_doc() -> Document {
        let mut doc = Document::new("the dog barked");
        doc.annotation_set_mut("")
            .add("Mention", 4, 7, features([("string", "dog")]));
        doc
    }

    fn mention_config() -> EnricherConfig {
        EnricherConfig {
            input_types: vec!["Mention".to_string()],
            min_word_length: 3,
            ..EnricherConfig::default()
        }
    }

    #[test]
    fn test_enrich_merges_relation_features() -> Result<()> {
        let enricher = Enricher::new(mention_config(), lexicon())?;
        let mut doc = annotated_doc();
        let stats = enricher.enrich(&mut doc)?;

        assert_eq!(stats.spans_examined, 1);
        assert_eq!(stats.spans_matched, 1);
        assert_eq!(stats.senses_accepted, 1);
        assert_eq!(stats.features_written, 3);

        let span = doc.annotation_set("").unwrap().get(0).unwrap();
        assert_eq!(span.feature_text("synonyms").as_deref(), Some("[canine]"));
        assert_eq!(span.feature_text("hypernyms").as_deref(), Some("[animal]"));
        assert_eq!(span.feature_text("hyponyms").as_deref(), Some("[puppy]"));
        assert!(span.feature("gloss").is_none());
        Ok(())
    }

    #[test]
    fn test_disabled_engine_is_a_no_op() -> Result<()> {
        let enricher = Enricher::disabled(mention_config());
        assert!(enricher.is_disabled());

        let mut doc = annotated_doc();
        let stats = enricher.enrich(&mut doc)?;
        assert_eq!(stats, EnrichStats::default());

        let span = doc.annotation_set("").unwrap().get(0).unwrap();
        assert_eq!(span.features.len(), 1);
        Ok(())
    }

    #[test]
    fn test_malformed_input_selector_is_dropped() -> Result<()> {
        let config = EnricherConfig {
            input_types: vec![".bad".to_string(), "Mention".to_string()],
            min_word_length: 3,
            ..EnricherConfig::default()
        };
        let enricher = Enricher::new(config, lexicon())?;
        let mut doc = annotated_doc();
        let stats = enricher.enrich(&mut doc)?;
        assert_eq!(stats.spans_matched, 1);
        Ok(())
    }

    #[test]
    fn test_malformed_output_selector_is_an_error() {
        let config = EnricherConfig {
            output_type: Some(".bad".to_string()),
            ..EnricherConfig::default()
        };
        assert!(Enricher::new(config, lexicon()).is_err());
    }

    #[test]
    fn test_selectors_run_in_configuration_order() -> Result<()> {
        let mut config = mention_config();
        config.input_types = vec!["Mention".to_string(), "Heading".to_string()];
        let enricher = Enricher::new(config, lexicon())?;

        let mut doc = Document::new("dog dog");
        let set = doc.annotation_set_mut("");
        set.add("Mention", 0, 3, features([("string", "dog")]));
        set.add("Heading", 4, 7, features([("string", "dog")]));

        let stats = enricher.enrich(&mut doc)?;
        assert_eq!(stats.spans_examined, 2);
        assert_eq!(stats.spans_matched, 2);
        Ok(())
    }
}
