//! # Lexnet
//!
//! A lexical relation enrichment library for annotated text, inspired by
//! WordNet-based annotation tooling.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Stand-off annotation model with typed feature values
//! - Pluggable lexical knowledge sources
//! - Synonym, antonym, hypernym, hyponym, meronym, holonym and attribute
//!   collection with bounded traversal
//! - Merge-onto-span and create-new-span output modes
//! - Optional Soundex recoding of output lists

pub mod annotation;
pub mod cli;
pub mod enrich;
pub mod error;
pub mod lexicon;

pub mod prelude {
    pub use crate::annotation::{Annotation, AnnotationSet, Document, FeatureValue, features};
    pub use crate::enrich::{EnrichStats, Enricher, EnricherConfig};
    pub use crate::error::{LexnetError, Result};
    pub use crate::lexicon::{LexicalSource, MemoryLexicon, PartOfSpeech, Sense};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
