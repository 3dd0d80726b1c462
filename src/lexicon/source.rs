//! The lexical source trait.
//!
//! [`LexicalSource`] is the narrow query interface the enrichment engine
//! holds on its knowledge base: sense lookup by term, gloss and member
//! retrieval, and relation traversal at synset and sense level. Everything
//! else about the backend (storage, caching, coverage) stays behind this
//! boundary.

use crate::error::Result;
use crate::lexicon::pos::PartOfSpeech;
use crate::lexicon::relation::{LexicalRelation, SemanticRelation};
use crate::lexicon::sense::{Sense, SynsetId};

/// A queryable lexical knowledge base.
///
/// Implementations must be thread-safe: the engine is shared across threads
/// by hosts that process distinct documents concurrently. All methods may
/// fail; the engine treats per-lookup failures as "no match" for the span in
/// question and continues.
///
/// All returned collections are ordered, and the order is meaningful: the
/// engine truncates them positionally, so implementations should return
/// senses and relation targets in their canonical (frequency or file) order.
pub trait LexicalSource: Send + Sync {
    /// Look up all senses of a term across every category.
    fn lookup(&self, term: &str) -> Result<Vec<Sense>>;

    /// Look up the senses of a term within one category.
    fn lookup_pos(&self, term: &str, pos: PartOfSpeech) -> Result<Vec<Sense>>;

    /// The gloss (definition text) of a synset.
    fn gloss(&self, synset: SynsetId) -> Result<String>;

    /// The member senses of a synset, in member order.
    fn members(&self, synset: SynsetId) -> Result<Vec<Sense>>;

    /// Synsets reachable from `synset` over one semantic relation edge.
    fn related(&self, synset: SynsetId, relation: SemanticRelation) -> Result<Vec<SynsetId>>;

    /// Senses reachable from `sense` over one lexical relation edge.
    fn sense_related(&self, sense: &Sense, relation: LexicalRelation) -> Result<Vec<Sense>>;

    /// The name of this source, for logging.
    fn name(&self) -> &'static str;
}
