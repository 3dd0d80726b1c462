//! Output shaping for aggregated relation data.
//!
//! The shaper turns a [`SenseReport`](crate::enrich::aggregator::SenseReport)
//! into document features. Two placements exist: merging features onto the
//! matched span itself, or creating a fresh span per sense in an output set.
//! List rendering and the optional phonetic recoding step are controlled by
//! the configured [`OutputPolicy`].

use log::warn;

use crate::annotation::document::AnnotationSet;
use crate::annotation::feature::{FeatureMap, FeatureValue};
use crate::annotation::selector::TypeSelector;
use crate::annotation::span::Annotation;
use crate::enrich::aggregator::{GLOSS_FEATURE, SenseReport};
use crate::enrich::config::{ListFormat, OutputPolicy};
use crate::enrich::enricher::EnrichStats;
use crate::error::Result;

/// Where created spans go: an annotation type plus an optional discriminator
/// feature stamped onto every created span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Annotation type of created spans
    pub ty: String,
    /// Feature name/value pair written first on every created span
    pub discriminator: Option<(String, String)>,
}

impl OutputTarget {
    /// Parse an output selector of the form `Type` or `Type.feature=value`.
    ///
    /// A `Type.feature` form carries no value to stamp, so it degrades to the
    /// bare type with a warning rather than failing the whole configuration.
    pub fn parse(input: &str) -> Result<OutputTarget> {
        let selector = TypeSelector::parse(input)?;
        let discriminator = match (selector.feature(), selector.value()) {
            (Some(feature), Some(value)) => Some((feature.to_string(), value.to_string())),
            (Some(_), None) => {
                warn!(
                    "output selector '{input}' names a feature without a value, using bare type '{}'",
                    selector.ty()
                );
                None
            }
            (None, _) => None,
        };
        Ok(OutputTarget {
            ty: selector.ty().to_string(),
            discriminator,
        })
    }
}

/// Render a lemma list under the output policy.
///
/// Returns `None` when nothing remains to write (the phonetic step can empty
/// a list).
pub fn serialize_list(policy: &OutputPolicy, lemmas: &[String]) -> Option<FeatureValue> {
    let rendered: Vec<String> = match policy.phonetic {
        Some(algorithm) => lemmas
            .iter()
            .filter_map(|lemma| algorithm.encode(lemma))
            .collect(),
        None => lemmas.to_vec(),
    };
    if rendered.is_empty() {
        return None;
    }
    Some(match policy.format {
        ListFormat::Structured => FeatureValue::List(rendered),
        ListFormat::Delimited => FeatureValue::Text(format!("[{}]", rendered.join(", "))),
    })
}

/// Merge a sense report onto an existing span's feature map.
///
/// The gloss always overwrites; relation lists are only written when the
/// span does not already carry the feature.
pub fn merge_onto(
    annotation: &mut Annotation,
    policy: &OutputPolicy,
    report: &SenseReport,
    stats: &mut EnrichStats,
) {
    if let Some(gloss) = &report.gloss {
        annotation.set_feature(GLOSS_FEATURE, FeatureValue::Text(gloss.clone()));
        stats.features_written += 1;
    }
    for (feature, lemmas) in &report.lists {
        if annotation.has_feature(feature) {
            continue;
        }
        if let Some(value) = serialize_list(policy, lemmas) {
            annotation.set_feature(*feature, value);
            stats.features_written += 1;
        }
    }
}

/// Create one span carrying a sense report, at the given offsets.
///
/// The span is created even when every relation list is empty; the
/// discriminator feature alone still marks the match.
pub fn create_span(
    set: &mut AnnotationSet,
    target: &OutputTarget,
    start: usize,
    end: usize,
    policy: &OutputPolicy,
    report: &SenseReport,
    stats: &mut EnrichStats,
) -> u32 {
    let mut features = FeatureMap::new();
    if let Some((feature, value)) = &target.discriminator {
        features.insert(feature.clone(), FeatureValue::Text(value.clone()));
        stats.features_written += 1;
    }
    if let Some(gloss) = &report.gloss {
        features.insert(GLOSS_FEATURE.to_string(), FeatureValue::Text(gloss.clone()));
        stats.features_written += 1;
    }
    for (feature, lemmas) in &report.lists {
        if features.contains_key(*feature) {
            continue;
        }
        if let Some(value) = serialize_list(policy, lemmas) {
            features.insert(feature.to_string(), value);
            stats.features_written += 1;
        }
    }
    stats.annotations_created += 1;
    set.add(target.ty.clone(), start, end, features)
}
