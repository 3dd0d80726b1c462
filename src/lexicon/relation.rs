//! Relation types between synsets and between senses.
//!
//! Semantic relations hold between whole synsets; lexical relations hold
//! between individual senses (specific lemmas of specific synsets). The two
//! levels are queried separately and both contribute to enrichment output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A relation between two synsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRelation {
    /// More general concept
    Hypernym,
    /// More specific concept
    Hyponym,
    /// Component part
    PartMeronym,
    /// Member of a group
    MemberMeronym,
    /// Constituent substance
    SubstanceMeronym,
    /// Whole of a component
    PartHolonym,
    /// Group a member belongs to
    MemberHolonym,
    /// Substance a constituent forms
    SubstanceHolonym,
    /// Attribute expressed by an adjective
    Attribute,
    /// Similar adjective cluster
    SimilarTo,
    /// Related verb grouping
    VerbGroup,
    /// Opposite concept
    Antonym,
}

impl SemanticRelation {
    /// All semantic relations, grouped by family.
    pub const ALL: [SemanticRelation; 12] = [
        SemanticRelation::Hypernym,
        SemanticRelation::Hyponym,
        SemanticRelation::PartMeronym,
        SemanticRelation::MemberMeronym,
        SemanticRelation::SubstanceMeronym,
        SemanticRelation::PartHolonym,
        SemanticRelation::MemberHolonym,
        SemanticRelation::SubstanceHolonym,
        SemanticRelation::Attribute,
        SemanticRelation::SimilarTo,
        SemanticRelation::VerbGroup,
        SemanticRelation::Antonym,
    ];

    /// The snake_case name of the relation.
    pub fn name(&self) -> &'static str {
        match self {
            SemanticRelation::Hypernym => "hypernym",
            SemanticRelation::Hyponym => "hyponym",
            SemanticRelation::PartMeronym => "part_meronym",
            SemanticRelation::MemberMeronym => "member_meronym",
            SemanticRelation::SubstanceMeronym => "substance_meronym",
            SemanticRelation::PartHolonym => "part_holonym",
            SemanticRelation::MemberHolonym => "member_holonym",
            SemanticRelation::SubstanceHolonym => "substance_holonym",
            SemanticRelation::Attribute => "attribute",
            SemanticRelation::SimilarTo => "similar_to",
            SemanticRelation::VerbGroup => "verb_group",
            SemanticRelation::Antonym => "antonym",
        }
    }
}

impl fmt::Display for SemanticRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A relation between two senses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalRelation {
    /// Opposite sense
    Antonym,
    /// Adverb or noun derived from an adjective sense
    DerivedFromAdjective,
}

impl LexicalRelation {
    /// All lexical relations.
    pub const ALL: [LexicalRelation; 2] =
        [LexicalRelation::Antonym, LexicalRelation::DerivedFromAdjective];

    /// The snake_case name of the relation.
    pub fn name(&self) -> &'static str {
        match self {
            LexicalRelation::Antonym => "antonym",
            LexicalRelation::DerivedFromAdjective => "derived_from_adjective",
        }
    }
}

impl fmt::Display for LexicalRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
