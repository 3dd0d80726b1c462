//! Feature value types for annotations.
//!
//! This module defines the [`FeatureValue`] enum which represents all possible
//! types of values that can be stored on annotation features, and the
//! [`FeatureMap`] alias used throughout the document model.
//!
//! # Type Conversion
//!
//! The `FeatureValue` enum provides conversion methods for extracting typed
//! values:
//!
//! ```
//! use lexnet::annotation::feature::FeatureValue;
//!
//! let text_value = FeatureValue::Text("hello".to_string());
//! assert_eq!(text_value.as_text(), Some("hello"));
//!
//! let int_value = FeatureValue::Integer(42);
//! assert_eq!(int_value.to_text(), Some("42".to_string()));
//!
//! let list_value = FeatureValue::List(vec!["a".to_string(), "b".to_string()]);
//! assert_eq!(list_value.as_list().map(|l| l.len()), Some(2));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Map from feature names to feature values, carried by every annotation.
pub type FeatureMap = HashMap<String, FeatureValue>;

/// Represents a value for a feature on an annotation.
///
/// This enum provides a small closed type system for annotation features.
/// Relation lists produced by enrichment are stored either as `List` values
/// or as their bracketed text form, depending on the configured output
/// policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// List of strings
    List(Vec<String>),
}

impl FeatureValue {
    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a list if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FeatureValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert to boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FeatureValue::Boolean(b) => Some(*b),
            FeatureValue::Integer(i) => Some(*i != 0),
            _ => None,
        }
    }

    /// Render a scalar value as text.
    ///
    /// Text, integer and boolean values render through their display form;
    /// list values have no scalar text form and return `None`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            FeatureValue::Text(s) => Some(s.clone()),
            FeatureValue::Integer(i) => Some(i.to_string()),
            FeatureValue::Boolean(b) => Some(b.to_string()),
            FeatureValue::List(_) => None,
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Integer(value)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Boolean(value)
    }
}

impl From<Vec<String>> for FeatureValue {
    fn from(value: Vec<String>) -> Self {
        FeatureValue::List(value)
    }
}

/// Build a feature map from name/value pairs.
///
/// # Examples
///
/// ```
/// use lexnet::annotation::feature::features;
///
/// let map = features([("string", "dog"), ("kind", "word")]);
/// assert_eq!(map.len(), 2);
/// ```
pub fn features<I, K, V>(pairs: I) -> FeatureMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FeatureValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
