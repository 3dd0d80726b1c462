//! Candidate extraction from annotated documents.
//!
//! A candidate is one input span that survived the exclusion filters,
//! carrying the term text to look up (when one could be derived) and a part
//! of speech hint read from the span's own features. Extraction is pure
//! selection; nothing here touches the document.

use crate::annotation::document::{AnnotationSet, Document};
use crate::annotation::selector::TypeSelector;
use crate::annotation::span::Annotation;
use crate::enrich::config::EnricherConfig;
use crate::enrich::enricher::EnrichStats;
use crate::lexicon::pos::PartOfSpeech;

/// Where a candidate's term text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSource {
    /// A configured feature of the span
    Feature,
    /// The raw document substring under the span
    Content,
}

/// A term to look up, with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub text: String,
    pub source: TermSource,
}

/// One span selected for enrichment.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Identifier of the span in the input set
    pub id: u32,
    pub start: usize,
    pub end: usize,
    /// Derived term; `None` when configured to skip spans without the feature
    pub term: Option<Term>,
    pub pos_hint: PartOfSpeech,
}

/// Read a span's part of speech hint from a tag feature.
///
/// An absent feature or an unrecognized tag both fall back to `Noun`.
pub fn pos_hint(annotation: &Annotation, feature: &str) -> PartOfSpeech {
    match annotation.feature_text(feature) {
        Some(tag) => PartOfSpeech::from_tag(&tag),
        None => PartOfSpeech::Noun,
    }
}

/// Enumerate candidates for one input selector, in ascending start order.
pub fn extract(
    doc: &Document,
    config: &EnricherConfig,
    selector: &TypeSelector,
    stats: &mut EnrichStats,
) -> Vec<Candidate> {
    let Some(set) = doc.annotation_set(&config.input_set) else {
        return Vec::new();
    };
    let mut spans = selector.select(set);
    spans.sort_by_key(|a| a.start);

    let mut candidates = Vec::new();
    for span in spans {
        stats.spans_examined += 1;
        if is_excluded(set, config, span) {
            stats.spans_excluded += 1;
            continue;
        }
        let term = derive_term(doc.content(), config, span);
        if let Some(term) = &term
            && term.text.chars().count() < config.min_word_length
        {
            stats.spans_below_length += 1;
            continue;
        }
        candidates.push(Candidate {
            id: span.id,
            start: span.start,
            end: span.end,
            pos_hint: pos_hint(span, &config.token_pos_feature),
            term,
        });
    }
    candidates
}

fn is_excluded(set: &AnnotationSet, config: &EnricherConfig, span: &Annotation) -> bool {
    for ty in &config.exclude_if_within {
        if !set.covering(ty, span.start, span.end).is_empty() {
            return true;
        }
    }
    for ty in &config.exclude_if_contains {
        if set
            .contained(span.start, span.end)
            .iter()
            .any(|inner| inner.ty == *ty)
        {
            return true;
        }
    }
    false
}

/// Derive the term text for a span.
///
/// The first configured term feature with a non-empty trimmed scalar value
/// wins. Without one, the span either contributes no term (and the
/// token-level fallback will run) or falls back to the document substring.
fn derive_term(content: &str, config: &EnricherConfig, span: &Annotation) -> Option<Term> {
    for feature in &config.term_features {
        if let Some(text) = span.feature_text(feature) {
            let text = text.trim();
            if !text.is_empty() {
                return Some(Term {
                    text: text.to_string(),
                    source: TermSource::Feature,
                });
            }
        }
    }
    if config.ignore_missing_feature {
        return None;
    }
    Some(Term {
        text: span.text(content).trim().to_string(),
        source: TermSource::Content,
    })
}
