//! Annotation spans over document content.

use serde::{Deserialize, Serialize};

use crate::annotation::feature::{FeatureMap, FeatureValue};

/// A single annotation: a typed span of document content with features.
///
/// Offsets are byte offsets into the owning document's content, with
/// `start <= end`. Annotations are append-only: once added to a set they are
/// never moved or deleted, and their `id` is stable for the lifetime of the
/// set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Identifier, unique within the owning annotation set
    pub id: u32,
    /// Annotation type, e.g. "Token" or "Lookup"
    #[serde(rename = "type")]
    pub ty: String,
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Feature map for this annotation
    pub features: FeatureMap,
}

impl Annotation {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get a feature value by name.
    pub fn feature(&self, name: &str) -> Option<&FeatureValue> {
        self.features.get(name)
    }

    /// Get a feature value rendered as text, if it has a scalar form.
    pub fn feature_text(&self, name: &str) -> Option<String> {
        self.features.get(name).and_then(|v| v.to_text())
    }

    /// Check if the annotation has a feature.
    pub fn has_feature(&self, name: &str) -> bool {
        self.features.contains_key(name)
    }

    /// Set a feature value, replacing any existing value.
    pub fn set_feature<K: Into<String>>(&mut self, name: K, value: FeatureValue) {
        self.features.insert(name.into(), value);
    }

    /// The slice of document content this span covers.
    ///
    /// Returns the empty string when the offsets do not fall on character
    /// boundaries of `content`.
    pub fn text<'a>(&self, content: &'a str) -> &'a str {
        content.get(self.start..self.end).unwrap_or("")
    }

    /// Check if this span covers the given range (inclusive at both ends).
    pub fn covers(&self, start: usize, end: usize) -> bool {
        self.start <= start && self.end >= end
    }

    /// Check if this span lies within the given range (inclusive at both ends).
    pub fn within(&self, start: usize, end: usize) -> bool {
        start <= self.start && self.end <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::feature::features;

    fn span(start: usize, end: usize) -> Annotation {
        Annotation {
            id: 0,
            ty: "Token".to_string(),
            start,
            end,
            features: features([("string", "dog")]),
        }
    }

    #[test]
    fn test_covered_text() {
        let content = "the dog barked";
        let ann = span(4, 7);
        assert_eq!(ann.text(content), "dog");
        assert_eq!(ann.len(), 3);
    }

    #[test]
    fn test_range_predicates() {
        let ann = span(4, 7);
        assert!(ann.covers(4, 7));
        assert!(ann.covers(5, 6));
        assert!(!ann.covers(3, 7));
        assert!(ann.within(4, 7));
        assert!(ann.within(0, 14));
        assert!(!ann.within(5, 14));
    }

    #[test]
    fn test_feature_text() {
        let mut ann = span(0, 3);
        ann.set_feature("length", FeatureValue::Integer(3));
        assert_eq!(ann.feature_text("string"), Some("dog".to_string()));
        assert_eq!(ann.feature_text("length"), Some("3".to_string()));
        assert_eq!(ann.feature_text("missing"), None);
    }
}
