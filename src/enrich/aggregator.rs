//! Relation aggregation for accepted senses.
//!
//! For each accepted sense the aggregator walks the knowledge base and
//! collects one ordered lemma list per relation category: synonyms, derived
//! forms, verb groups, antonyms, hypernyms, hyponyms, meronyms, holonyms
//! and attributes. Which passes feed which category, and which categories
//! apply to which part of speech, is driven by a constant rule table.
//!
//! Every collection pass is bounded by the configured truncation count:
//! at most that many relation edges are followed from the source, and at
//! most that many member lemmas are emitted per reached synset. Lists keep
//! backend order and are not deduplicated.

use std::collections::{HashSet, VecDeque};

use crate::enrich::config::EnricherConfig;
use crate::error::Result;
use crate::lexicon::pos::PartOfSpeech;
use crate::lexicon::relation::{LexicalRelation, SemanticRelation};
use crate::lexicon::sense::{Sense, SynsetId};
use crate::lexicon::source::LexicalSource;

/// Feature name for the gloss text.
pub const GLOSS_FEATURE: &str = "gloss";
/// Feature name for the synonyms list.
pub const SYNONYMS_FEATURE: &str = "synonyms";
/// Feature name for the hypernyms list.
pub const HYPERNYMS_FEATURE: &str = "hypernyms";

/// One relation category: the feature it writes, the relation passes that
/// feed it, and the category of sense it applies to (if restricted).
struct CategoryRule {
    feature: &'static str,
    semantic: &'static [SemanticRelation],
    lexical: &'static [LexicalRelation],
    pos_gate: Option<PartOfSpeech>,
}

/// Relation categories in output order. Synonyms are handled separately
/// (they come from synset membership, not a relation pass) and precede all
/// of these.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        feature: "derived",
        semantic: &[],
        lexical: &[LexicalRelation::DerivedFromAdjective],
        pos_gate: Some(PartOfSpeech::Adjective),
    },
    CategoryRule {
        feature: "verb_group",
        semantic: &[SemanticRelation::VerbGroup],
        lexical: &[],
        pos_gate: Some(PartOfSpeech::Verb),
    },
    CategoryRule {
        feature: "antonyms",
        semantic: &[SemanticRelation::Antonym],
        lexical: &[LexicalRelation::Antonym],
        pos_gate: None,
    },
    CategoryRule {
        feature: HYPERNYMS_FEATURE,
        semantic: &[SemanticRelation::Hypernym],
        lexical: &[],
        pos_gate: None,
    },
    CategoryRule {
        feature: "hyponyms",
        semantic: &[SemanticRelation::Hyponym],
        lexical: &[],
        pos_gate: None,
    },
    // Part, member and substance variants are collapsed into one category.
    CategoryRule {
        feature: "meronyms",
        semantic: &[
            SemanticRelation::PartMeronym,
            SemanticRelation::MemberMeronym,
            SemanticRelation::SubstanceMeronym,
        ],
        lexical: &[],
        pos_gate: None,
    },
    CategoryRule {
        feature: "holonyms",
        semantic: &[
            SemanticRelation::PartHolonym,
            SemanticRelation::MemberHolonym,
            SemanticRelation::SubstanceHolonym,
        ],
        lexical: &[],
        pos_gate: None,
    },
    CategoryRule {
        feature: "attributes",
        semantic: &[SemanticRelation::Attribute],
        lexical: &[],
        pos_gate: None,
    },
];

/// Aggregated relation data for one accepted sense.
///
/// `lists` holds only non-empty categories, in output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SenseReport {
    /// Gloss of the sense's synset, when gloss output is enabled
    pub gloss: Option<String>,
    /// Relation category name paired with its ordered lemma list
    pub lists: Vec<(&'static str, Vec<String>)>,
}

impl SenseReport {
    fn push(&mut self, feature: &'static str, lemmas: Vec<String>) {
        if !lemmas.is_empty() {
            self.lists.push((feature, lemmas));
        }
    }

    /// The lemma list for a category, if present.
    pub fn list(&self, feature: &str) -> Option<&[String]> {
        self.lists
            .iter()
            .find(|(name, _)| *name == feature)
            .map(|(_, lemmas)| lemmas.as_slice())
    }
}

/// Collect the relation report for one sense.
///
/// A backend failure in any pass abandons the whole report; the caller
/// decides what earlier senses' output to keep.
pub fn aggregate(
    source: &dyn LexicalSource,
    config: &EnricherConfig,
    sense: &Sense,
) -> Result<SenseReport> {
    let truncate = config.truncate;
    let mut report = SenseReport::default();

    if config.add_gloss {
        report.gloss = Some(source.gloss(sense.synset)?);
    }

    // Synonyms are the sibling lemmas of the sense's own synset; adjectives
    // pull the similar-to cluster in as well.
    let mut synonyms: Vec<String> = source
        .members(sense.synset)?
        .into_iter()
        .filter(|member| member.lemma != sense.lemma)
        .map(|member| member.lemma)
        .take(truncate)
        .collect();
    if sense.pos == PartOfSpeech::Adjective {
        synonyms.extend(semantic_pass(
            source,
            sense.synset,
            &[SemanticRelation::SimilarTo],
            truncate,
        )?);
    }
    report.push(SYNONYMS_FEATURE, synonyms);

    for rule in CATEGORY_RULES {
        if let Some(gate) = rule.pos_gate
            && sense.pos != gate
        {
            continue;
        }
        let lemmas = if rule.feature == HYPERNYMS_FEATURE && config.full_hypernym_hierarchy {
            hypernym_closure(source, sense.synset, truncate)?
        } else {
            let mut lemmas = semantic_pass(source, sense.synset, rule.semantic, truncate)?;
            lemmas.extend(lexical_pass(source, sense, rule.lexical, truncate)?);
            lemmas
        };
        report.push(rule.feature, lemmas);
    }

    Ok(report)
}

/// Follow synset-level relations, emitting member lemmas of each target.
fn semantic_pass(
    source: &dyn LexicalSource,
    synset: SynsetId,
    relations: &[SemanticRelation],
    truncate: usize,
) -> Result<Vec<String>> {
    let mut lemmas = Vec::new();
    for relation in relations {
        for target in source.related(synset, *relation)?.into_iter().take(truncate) {
            lemmas.extend(
                source
                    .members(target)?
                    .into_iter()
                    .map(|member| member.lemma)
                    .take(truncate),
            );
        }
    }
    Ok(lemmas)
}

/// Follow sense-level relations, emitting member lemmas of each target's
/// synset.
fn lexical_pass(
    source: &dyn LexicalSource,
    sense: &Sense,
    relations: &[LexicalRelation],
    truncate: usize,
) -> Result<Vec<String>> {
    let mut lemmas = Vec::new();
    for relation in relations {
        for target in source
            .sense_related(sense, *relation)?
            .into_iter()
            .take(truncate)
        {
            lemmas.extend(
                source
                    .members(target.synset)?
                    .into_iter()
                    .map(|member| member.lemma)
                    .take(truncate),
            );
        }
    }
    Ok(lemmas)
}

/// Breadth-first hypernym closure from a synset.
///
/// Each ancestor synset is visited exactly once, so cyclic relation data
/// terminates; lemmas are emitted in the order ancestors are first reached.
fn hypernym_closure(
    source: &dyn LexicalSource,
    start: SynsetId,
    truncate: usize,
) -> Result<Vec<String>> {
    let mut lemmas = Vec::new();
    let mut visited: HashSet<SynsetId> = HashSet::new();
    let mut queue: VecDeque<SynsetId> = VecDeque::new();

    visited.insert(start);
    for target in source
        .related(start, SemanticRelation::Hypernym)?
        .into_iter()
        .take(truncate)
    {
        if visited.insert(target) {
            queue.push_back(target);
        }
    }

    while let Some(synset) = queue.pop_front() {
        lemmas.extend(
            source
                .members(synset)?
                .into_iter()
                .map(|member| member.lemma)
                .take(truncate),
        );
        for target in source
            .related(synset, SemanticRelation::Hypernym)?
            .into_iter()
            .take(truncate)
        {
            if visited.insert(target) {
                queue.push_back(target);
            }
        }
    }

    Ok(lemmas)
}
