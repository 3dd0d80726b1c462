//! Documents and annotation sets.
//!
//! A [`Document`] owns its text content together with named sets of
//! annotations over that content. Annotation sets are append-only: spans are
//! added with stable identifiers and never moved or removed, so enrichment
//! can interleave reads and writes without invalidating earlier results.
//!
//! # Examples
//!
//! ```
//! use lexnet::annotation::document::Document;
//! use lexnet::annotation::feature::features;
//!
//! let mut doc = Document::new("the dog barked");
//! let set = doc.annotation_set_mut("");
//! set.add("Token", 4, 7, features([("string", "dog")]));
//!
//! let tokens = doc.annotation_set("").unwrap().of_type("Token");
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text(doc.content()), "dog");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::annotation::feature::FeatureMap;
use crate::annotation::span::Annotation;

/// Name of the default annotation set.
pub const DEFAULT_SET: &str = "";

/// An ordered, append-only collection of annotations.
///
/// Identifiers are assigned sequentially at insertion and double as indices
/// into the set, which keeps lookups by id constant-time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    annotations: Vec<Annotation>,
}

impl AnnotationSet {
    /// Create a new empty annotation set.
    pub fn new() -> Self {
        AnnotationSet {
            annotations: Vec::new(),
        }
    }

    /// Add an annotation and return its identifier.
    pub fn add<S: Into<String>>(
        &mut self,
        ty: S,
        start: usize,
        end: usize,
        features: FeatureMap,
    ) -> u32 {
        let id = self.annotations.len() as u32;
        self.annotations.push(Annotation {
            id,
            ty: ty.into(),
            start,
            end,
            features,
        });
        id
    }

    /// Get an annotation by identifier.
    pub fn get(&self, id: u32) -> Option<&Annotation> {
        self.annotations.get(id as usize)
    }

    /// Get a mutable annotation by identifier.
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Annotation> {
        self.annotations.get_mut(id as usize)
    }

    /// Iterate over all annotations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    /// All annotations of a type, in insertion order.
    pub fn of_type(&self, ty: &str) -> Vec<&Annotation> {
        self.annotations.iter().filter(|a| a.ty == ty).collect()
    }

    /// All annotations of a type carrying a feature.
    pub fn of_type_with_feature(&self, ty: &str, feature: &str) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.ty == ty && a.has_feature(feature))
            .collect()
    }

    /// All annotations of a type whose feature renders to the given text.
    pub fn of_type_with_feature_value(
        &self,
        ty: &str,
        feature: &str,
        value: &str,
    ) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.ty == ty && a.feature_text(feature).as_deref() == Some(value))
            .collect()
    }

    /// All annotations of a type that cover the given range, ends inclusive.
    pub fn covering(&self, ty: &str, start: usize, end: usize) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.ty == ty && a.covers(start, end))
            .collect()
    }

    /// All annotations lying within the given range, ends inclusive.
    pub fn contained(&self, start: usize, end: usize) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.within(start, end))
            .collect()
    }

    /// Get the number of annotations.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// A document: text content plus named annotation sets.
///
/// The default set lives under the empty name, [`DEFAULT_SET`]. Sets are
/// created on demand through [`Document::annotation_set_mut`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// The text content
    content: String,
    /// Named annotation sets over the content
    sets: HashMap<String, AnnotationSet>,
}

impl Document {
    /// Create a new document with the given content and no annotations.
    pub fn new<S: Into<String>>(content: S) -> Self {
        Document {
            content: content.into(),
            sets: HashMap::new(),
        }
    }

    /// The text content of the document.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get an annotation set by name, if it exists.
    ///
    /// The default set is addressed by the empty name.
    pub fn annotation_set(&self, name: &str) -> Option<&AnnotationSet> {
        self.sets.get(name)
    }

    /// Get an annotation set by name, creating it if absent.
    pub fn annotation_set_mut(&mut self, name: &str) -> &mut AnnotationSet {
        self.sets.entry(name.to_string()).or_default()
    }

    /// Names of all annotation sets on the document.
    pub fn set_names(&self) -> Vec<&str> {
        self.sets.keys().map(|s| s.as_str()).collect()
    }

    /// Total number of annotations across all sets.
    pub fn annotation_count(&self) -> usize {
        self.sets.values().map(|s| s.len()).sum()
    }
}
