//! Lexical knowledge base interface and in-memory backend.
//!
//! This module defines the vocabulary of the knowledge base (categories,
//! relations, senses), the [`LexicalSource`] trait the enrichment engine
//! queries through, and [`MemoryLexicon`], a small JSON-loadable backend.

pub mod memory;
pub mod pos;
pub mod relation;
pub mod sense;
pub mod source;

// Re-export commonly used types
pub use memory::MemoryLexicon;
pub use pos::PartOfSpeech;
pub use relation::{LexicalRelation, SemanticRelation};
pub use sense::{Sense, SynsetId};
pub use source::LexicalSource;
