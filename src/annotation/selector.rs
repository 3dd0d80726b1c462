//! Annotation type selectors.
//!
//! A selector names the spans an operation applies to: a bare annotation
//! type, a type restricted to spans carrying a feature, or a type restricted
//! to spans whose feature has a particular value.
//!
//! # Examples
//!
//! ```
//! use lexnet::annotation::selector::TypeSelector;
//!
//! let selector = TypeSelector::parse("Lookup.majorType=location").unwrap();
//! assert_eq!(selector.ty(), "Lookup");
//! assert!(TypeSelector::parse("Lookup.").is_err());
//! ```

use std::fmt;

use crate::annotation::document::AnnotationSet;
use crate::annotation::span::Annotation;
use crate::error::{LexnetError, Result};

/// A parsed annotation selector.
///
/// Accepted forms are `name`, `name.feature` and `name.feature=value`, with
/// no component empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSelector {
    ty: String,
    feature: Option<String>,
    value: Option<String>,
}

impl TypeSelector {
    /// Parse a selector string.
    ///
    /// Returns a config error for anything outside the three accepted forms.
    pub fn parse(input: &str) -> Result<TypeSelector> {
        let input = input.trim();
        let (ty, rest) = match input.split_once('.') {
            Some((ty, rest)) => (ty, Some(rest)),
            None => (input, None),
        };
        if ty.is_empty() {
            return Err(LexnetError::config(format!(
                "selector '{input}' has an empty annotation type"
            )));
        }
        let (feature, value) = match rest {
            None => (None, None),
            Some(rest) => match rest.split_once('=') {
                None => (Some(rest), None),
                Some((feature, value)) => (Some(feature), Some(value)),
            },
        };
        if let Some(feature) = feature
            && (feature.is_empty() || feature.contains('.'))
        {
            return Err(LexnetError::config(format!(
                "selector '{input}' has a malformed feature name"
            )));
        }
        if let Some(value) = value
            && value.is_empty()
        {
            return Err(LexnetError::config(format!(
                "selector '{input}' has an empty feature value"
            )));
        }
        Ok(TypeSelector {
            ty: ty.to_string(),
            feature: feature.map(|s| s.to_string()),
            value: value.map(|s| s.to_string()),
        })
    }

    /// The annotation type this selector names.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// The feature restriction, if any.
    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    /// The feature value restriction, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// All spans of the set matched by this selector, in insertion order.
    pub fn select<'a>(&self, set: &'a AnnotationSet) -> Vec<&'a Annotation> {
        match (&self.feature, &self.value) {
            (None, _) => set.of_type(&self.ty),
            (Some(feature), None) => set.of_type_with_feature(&self.ty, feature),
            (Some(feature), Some(value)) => {
                set.of_type_with_feature_value(&self.ty, feature, value)
            }
        }
    }
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)?;
        if let Some(feature) = &self.feature {
            write!(f, ".{feature}")?;
        }
        if let Some(value) = &self.value {
            write!(f, "={value}")?;
        }
        Ok(())
    }
}
