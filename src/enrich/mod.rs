//! Lexical relation enrichment engine.
//!
//! This module provides the engine that looks up candidate spans in a
//! lexical knowledge source and writes relation features (synonyms,
//! antonyms, hypernyms and the rest) back onto the document, either merged
//! onto the matched spans or as newly created spans.

pub mod aggregator;
pub mod candidate;
pub mod config;
pub mod enricher;
pub mod matcher;
pub mod phonetic;
pub mod resolver;
pub mod shaper;

// Re-export commonly used types
pub use aggregator::SenseReport;
pub use candidate::{Candidate, Term, TermSource};
pub use config::{EnricherConfig, ListFormat, OutputPolicy};
pub use enricher::{EnrichStats, Enricher};
pub use phonetic::{PhoneticAlgorithm, soundex};
pub use resolver::{Resolution, Resolver};
pub use shaper::OutputTarget;
