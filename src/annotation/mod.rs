//! Annotated document model.
//!
//! This module provides the document, annotation set and feature types the
//! enrichment engine reads from and writes to, along with selector parsing
//! and a plain-text word annotator for bootstrapping token layers.

pub mod document;
pub mod feature;
pub mod selector;
pub mod span;
pub mod tokenize;

// Re-export commonly used types
pub use document::{AnnotationSet, DEFAULT_SET, Document};
pub use feature::{FeatureMap, FeatureValue, features};
pub use selector::TypeSelector;
pub use span::Annotation;
pub use tokenize::annotate_words;
