//! Per-candidate matching strategy.
//!
//! Each candidate runs through up to two passes. The full-phrase pass (when
//! enabled) joins the term's whitespace with underscores and tries one
//! lookup for the whole phrase; a backend hit ends the span's processing,
//! whether or not any sense survived filtering. The fallback pass depends on
//! where the term came from: feature-derived terms are split into words and
//! each word is looked up against the candidate span, while
//! substring-derived (or absent) terms fall through to the word tokens
//! inside the span, each looked up and enriched in place.
//!
//! Backend failures never abort the document. A failed lookup is logged,
//! counted, and treated as no match for that lookup alone.

use log::warn;
use regex::Regex;

use crate::annotation::document::Document;
use crate::annotation::span::Annotation;
use crate::enrich::aggregator;
use crate::enrich::candidate::{Candidate, TermSource, pos_hint};
use crate::enrich::config::EnricherConfig;
use crate::enrich::enricher::EnrichStats;
use crate::enrich::resolver::{Resolution, Resolver};
use crate::enrich::shaper::{self, OutputTarget};
use crate::lexicon::pos::PartOfSpeech;
use crate::lexicon::sense::Sense;
use crate::lexicon::source::LexicalSource;

/// Everything a matching pass needs, borrowed from the engine per call.
pub struct MatchContext<'a> {
    pub config: &'a EnricherConfig,
    pub source: &'a dyn LexicalSource,
    /// Output target when creating spans; `None` merges onto matched spans
    pub create: Option<&'a OutputTarget>,
    /// Splits feature-derived terms into words
    pub word_split: &'a Regex,
    /// Collapses whitespace runs for the full-phrase lookup
    pub whitespace: &'a Regex,
}

/// Where an accepted sense's output goes: the span to merge onto, and the
/// offsets for created spans.
struct WriteTarget<'a> {
    set: &'a str,
    id: u32,
    start: usize,
    end: usize,
}

/// A token snapshot taken before any writes, so created spans are never
/// re-examined within the same candidate.
struct TokenInfo {
    id: u32,
    start: usize,
    end: usize,
    root: Option<String>,
    hint: PartOfSpeech,
}

/// Run the matching passes for one candidate.
pub fn match_candidate(
    ctx: &MatchContext<'_>,
    doc: &mut Document,
    candidate: &Candidate,
    stats: &mut EnrichStats,
) {
    let span_target = WriteTarget {
        set: &ctx.config.input_set,
        id: candidate.id,
        start: candidate.start,
        end: candidate.end,
    };

    if ctx.config.attempt_full_match
        && let Some(term) = &candidate.term
    {
        let phrase = ctx.whitespace.replace_all(&term.text, "_");
        if let Some(senses) = resolve_logged(ctx, &phrase, candidate.pos_hint, stats) {
            process_senses(ctx, doc, senses, &span_target, stats);
            stats.spans_matched += 1;
            return;
        }
    }

    let mut matched = false;
    match &candidate.term {
        Some(term) if term.source == TermSource::Feature => {
            for word in ctx.word_split.split(&term.text) {
                if word.is_empty() || word.chars().count() < ctx.config.min_word_length {
                    continue;
                }
                if let Some(senses) = resolve_logged(ctx, word, candidate.pos_hint, stats) {
                    process_senses(ctx, doc, senses, &span_target, stats);
                    matched = true;
                }
            }
        }
        _ => {
            for token in collect_tokens(doc, ctx.config, candidate) {
                let Some(root) = &token.root else {
                    continue;
                };
                if root.chars().count() < ctx.config.min_word_length {
                    continue;
                }
                if let Some(senses) = resolve_logged(ctx, root, token.hint, stats) {
                    let token_target = WriteTarget {
                        set: &ctx.config.token_set,
                        id: token.id,
                        start: token.start,
                        end: token.end,
                    };
                    process_senses(ctx, doc, senses, &token_target, stats);
                    matched = true;
                }
            }
        }
    }
    if matched {
        stats.spans_matched += 1;
    }
}

/// One bounded lookup, with failures degraded to no match.
///
/// `Some` means the backend knew the term; the sense list may be empty
/// when filtering discarded everything.
fn resolve_logged(
    ctx: &MatchContext<'_>,
    term: &str,
    hint: PartOfSpeech,
    stats: &mut EnrichStats,
) -> Option<Vec<Sense>> {
    stats.lookups += 1;
    let resolver = Resolver::new(ctx.source, ctx.config.match_pos, ctx.config.truncate);
    match resolver.resolve(term, hint) {
        Ok(Resolution::Matched(senses)) => Some(senses),
        Ok(Resolution::NoMatch) => None,
        Err(e) => {
            warn!("lookup for '{term}' failed: {e}");
            stats.lookup_failures += 1;
            None
        }
    }
}

/// Aggregate and write out each accepted sense.
///
/// Merging only ever applies the first sense; creating applies every sense.
/// An aggregation failure drops that sense alone, keeping earlier output.
fn process_senses(
    ctx: &MatchContext<'_>,
    doc: &mut Document,
    mut senses: Vec<Sense>,
    target: &WriteTarget<'_>,
    stats: &mut EnrichStats,
) {
    if ctx.create.is_none() {
        senses.truncate(1);
    }
    for sense in senses {
        match aggregator::aggregate(ctx.source, ctx.config, &sense) {
            Ok(report) => {
                stats.senses_accepted += 1;
                match ctx.create {
                    Some(output_target) => {
                        let set = doc.annotation_set_mut(&ctx.config.output_set);
                        shaper::create_span(
                            set,
                            output_target,
                            target.start,
                            target.end,
                            &ctx.config.output,
                            &report,
                            stats,
                        );
                    }
                    None => {
                        if let Some(annotation) =
                            doc.annotation_set_mut(target.set).get_mut(target.id)
                        {
                            shaper::merge_onto(annotation, &ctx.config.output, &report, stats);
                        }
                    }
                }
            }
            Err(e) => {
                warn!("relation aggregation for '{}' failed: {e}", sense.lemma);
                stats.lookup_failures += 1;
            }
        }
    }
}

/// Snapshot the word tokens inside a candidate span, in offset order.
fn collect_tokens(doc: &Document, config: &EnricherConfig, candidate: &Candidate) -> Vec<TokenInfo> {
    let Some(set) = doc.annotation_set(&config.token_set) else {
        return Vec::new();
    };
    let mut tokens: Vec<&Annotation> = set
        .contained(candidate.start, candidate.end)
        .into_iter()
        .filter(|a| a.ty == config.token_type && is_word_token(config, a))
        .collect();
    tokens.sort_by_key(|a| a.start);
    tokens
        .into_iter()
        .map(|a| TokenInfo {
            id: a.id,
            start: a.start,
            end: a.end,
            root: a
                .feature_text(&config.token_root_feature)
                .map(|root| root.trim().to_string()),
            hint: pos_hint(a, &config.token_pos_feature),
        })
        .collect()
}

/// Apply the token kind filter; an empty feature name disables it.
fn is_word_token(config: &EnricherConfig, token: &Annotation) -> bool {
    if config.token_kind_feature.is_empty() {
        return true;
    }
    token
        .feature_text(&config.token_kind_feature)
        .is_some_and(|kind| kind == config.token_kind_value)
}
