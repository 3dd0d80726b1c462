//! Configuration for the enrichment engine.
//!
//! [`EnricherConfig`] carries every recognized option with the defaults the
//! engine was designed around. Configurations serialize as JSON and can be
//! loaded from a file; absent fields keep their defaults.
//!
//! # Examples
//!
//! ```
//! use lexnet::enrich::config::EnricherConfig;
//!
//! let config = EnricherConfig::default();
//! assert_eq!(config.input_types, vec!["Token".to_string()]);
//! assert_eq!(config.min_word_length, 4);
//! assert!(config.match_pos);
//! ```

use serde::{Deserialize, Serialize};

use crate::enrich::phonetic::PhoneticAlgorithm;
use crate::error::{LexnetError, Result};

/// Serialization form for relation lists written to features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFormat {
    /// A single bracketed, comma-space-separated string, e.g. `[a, b, c]`
    Delimited,
    /// A structured list value preserving the lemma sequence
    Structured,
}

/// How relation lists are rendered onto features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPolicy {
    /// Serialization form for relation lists
    pub format: ListFormat,
    /// Optional phonetic re-encoding applied to every emitted lemma
    pub phonetic: Option<PhoneticAlgorithm>,
}

impl Default for OutputPolicy {
    fn default() -> Self {
        OutputPolicy {
            format: ListFormat::Delimited,
            phonetic: None,
        }
    }
}

/// Configuration for the enricher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnricherConfig {
    /// Annotation set the input spans are read from ("" = default set).
    pub input_set: String,
    /// Annotation set created spans are written to ("" = default set).
    pub output_set: String,
    /// Selectors for the span types to enrich, in processing order.
    /// Each entry is `name`, `name.feature` or `name.feature=value`.
    pub input_types: Vec<String>,
    /// Feature names tried in order when deriving a span's term.
    pub term_features: Vec<String>,
    /// Annotation set the token layer lives in ("" = default set).
    pub token_set: String,
    /// Annotation type of the token layer.
    pub token_type: String,
    /// Token feature holding the root form used for lookups.
    pub token_root_feature: String,
    /// Feature holding the part-of-speech tag, on tokens and input spans.
    pub token_pos_feature: String,
    /// Token feature distinguishing word tokens ("" disables the filter).
    pub token_kind_feature: String,
    /// Value of the kind feature that marks word tokens.
    pub token_kind_value: String,
    /// Terms shorter than this many characters are never looked up.
    pub min_word_length: usize,
    /// Discard senses whose category disagrees with the tag-derived hint.
    pub match_pos: bool,
    /// Try the whole term as one lookup before falling back to words.
    pub attempt_full_match: bool,
    /// When a span has no usable term feature, skip the content substring
    /// and go straight to the token-level fallback.
    pub ignore_missing_feature: bool,
    /// Write each sense's gloss alongside its relation lists.
    pub add_gloss: bool,
    /// Collect the transitive hypernym closure instead of direct hypernyms.
    pub full_hypernym_hierarchy: bool,
    /// Span type created per accepted sense (`Type` or `Type.feature=value`);
    /// unset means relation data merges onto the matched span instead.
    pub output_type: Option<String>,
    /// Bound on accepted senses, traversed edges and emitted lemmas per edge.
    pub truncate: usize,
    /// Skip spans covered by a span of any of these types.
    pub exclude_if_within: Vec<String>,
    /// Skip spans containing a span of any of these types.
    pub exclude_if_contains: Vec<String>,
    /// Rendering policy for relation lists.
    pub output: OutputPolicy,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        EnricherConfig {
            input_set: String::new(),
            output_set: String::new(),
            input_types: vec!["Token".to_string()],
            term_features: vec!["string".to_string()],
            token_set: String::new(),
            token_type: "Token".to_string(),
            token_root_feature: "string".to_string(),
            token_pos_feature: "category".to_string(),
            token_kind_feature: "kind".to_string(),
            token_kind_value: "word".to_string(),
            min_word_length: 4,
            match_pos: true,
            attempt_full_match: false,
            ignore_missing_feature: false,
            add_gloss: false,
            full_hypernym_hierarchy: false,
            output_type: None,
            truncate: 4,
            exclude_if_within: Vec::new(),
            exclude_if_contains: Vec::new(),
            output: OutputPolicy::default(),
        }
    }
}

impl EnricherConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Fields absent from the file keep their defaults.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LexnetError::config(format!("Failed to read config file '{path}': {e}"))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            LexnetError::config(format!("Failed to parse config JSON from '{path}': {e}"))
        })
    }
}
