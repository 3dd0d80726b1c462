//! Output formatting for CLI commands.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::annotation::document::Document;
use crate::cli::args::{LexnetArgs, OutputFormat};
use crate::enrich::enricher::EnrichStats;
use crate::error::Result;

/// Result structure for document enrichment.
#[derive(Debug, Serialize, Deserialize)]
pub struct EnrichmentOutput {
    pub document: Document,
    pub stats: EnrichStats,
}

/// One relation list of a sense.
#[derive(Debug, Serialize, Deserialize)]
pub struct RelationEntry {
    pub name: String,
    pub lemmas: Vec<String>,
}

/// One sense returned by a lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SenseEntry {
    pub lemma: String,
    pub pos: String,
    pub synset: String,
    pub gloss: Option<String>,
    pub relations: Vec<RelationEntry>,
}

/// Result structure for term lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupOutput {
    pub term: String,
    pub senses: Vec<SenseEntry>,
}

/// Lexicon statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconSummary {
    pub path: String,
    pub synsets: usize,
    pub senses: usize,
    pub relations: usize,
    pub lexical_relations: usize,
    pub synsets_by_pos: HashMap<String, usize>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexnetArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexnetArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("EnrichmentOutput") => {
            output_enrichment_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("LookupOutput") => {
            output_lookup_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("LexiconSummary") => {
            output_lexicon_summary_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("EnrichStats") => {
            output_stats_human(&value, args)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value, args)
        }
    }
}

/// Output an enriched document in human format.
fn output_enrichment_human(value: &serde_json::Value, args: &LexnetArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };
    let content = value
        .pointer("/document/content")
        .and_then(|c| c.as_str())
        .unwrap_or("");

    println!("Enriched Document:");
    println!("══════════════════");

    if let Some(sets) = value.pointer("/document/sets").and_then(|s| s.as_object()) {
        for (set_name, set_value) in sets {
            let annotations = set_value
                .get("annotations")
                .and_then(|a| a.as_array())
                .cloned()
                .unwrap_or_default();

            println!();
            if set_name.is_empty() {
                println!("Default set ({} annotations):", annotations.len());
            } else {
                println!("Set '{}' ({} annotations):", set_name, annotations.len());
            }

            for annotation in &annotations {
                let ty = annotation
                    .get("type")
                    .and_then(|t| t.as_str())
                    .unwrap_or("?");
                let start = annotation.get("start").and_then(|s| s.as_u64()).unwrap_or(0) as usize;
                let end = annotation.get("end").and_then(|e| e.as_u64()).unwrap_or(0) as usize;

                match content.get(start..end) {
                    Some(snippet) => println!("  [{start}..{end}] {ty} \"{snippet}\""),
                    None => println!("  [{start}..{end}] {ty}"),
                }

                if let Some(features) = annotation.get("features").and_then(|f| f.as_object()) {
                    for (feature_name, feature_value) in features {
                        let formatted_value = format_value(feature_value);
                        println!("    {feature_name}: {formatted_value}");
                    }
                }
            }
        }
    }

    if let Some(stats) = obj.get("stats") {
        println!();
        output_stats_human(stats, args)?;
    }
    Ok(())
}

/// Output enrichment statistics in human format.
fn output_stats_human(value: &serde_json::Value, _args: &LexnetArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    println!("Enrichment Statistics:");
    println!("═════════════════════");

    let counters = [
        ("spans_examined", "Spans examined"),
        ("spans_excluded", "Spans excluded"),
        ("spans_below_length", "Spans below length gate"),
        ("spans_matched", "Spans matched"),
        ("lookups", "Lookups issued"),
        ("lookup_failures", "Lookup failures"),
        ("senses_accepted", "Senses accepted"),
        ("annotations_created", "Annotations created"),
        ("features_written", "Features written"),
    ];
    for (key, label) in counters {
        if let Some(count) = obj.get(key).and_then(|c| c.as_u64()) {
            println!("{label}: {count}");
        }
    }
    Ok(())
}

/// Output lookup results in human format.
fn output_lookup_human(value: &serde_json::Value, _args: &LexnetArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };
    let term = obj.get("term").and_then(|t| t.as_str()).unwrap_or("?");

    println!("Senses for '{term}':");
    println!("═══════════════════");

    let senses = obj
        .get("senses")
        .and_then(|s| s.as_array())
        .cloned()
        .unwrap_or_default();
    if senses.is_empty() {
        println!();
        println!("No senses found.");
        return Ok(());
    }

    for (i, sense) in senses.iter().enumerate() {
        let lemma = sense.get("lemma").and_then(|l| l.as_str()).unwrap_or("?");
        let pos = sense.get("pos").and_then(|p| p.as_str()).unwrap_or("?");
        let synset = sense.get("synset").and_then(|s| s.as_str()).unwrap_or("?");

        println!();
        println!("Sense {}: {lemma} ({pos}, {synset})", i + 1);
        println!("─────────────");

        if let Some(gloss) = sense.get("gloss").and_then(|g| g.as_str()) {
            println!("gloss: {gloss}");
        }
        if let Some(relations) = sense.get("relations").and_then(|r| r.as_array()) {
            for relation in relations {
                let name = relation.get("name").and_then(|n| n.as_str()).unwrap_or("?");
                if let Some(lemmas) = relation.get("lemmas").and_then(|l| l.as_array()) {
                    let joined = lemmas
                        .iter()
                        .filter_map(|l| l.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("{name}: {joined}");
                }
            }
        }
    }
    Ok(())
}

/// Output lexicon statistics in human format.
fn output_lexicon_summary_human(value: &serde_json::Value, _args: &LexnetArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    println!("Lexicon Statistics:");
    println!("═══════════════════");

    if let Some(path) = obj.get("path").and_then(|p| p.as_str()) {
        println!("Path: {path}");
    }
    if let Some(synsets) = obj.get("synsets").and_then(|s| s.as_u64()) {
        println!("Synsets: {synsets}");
    }
    if let Some(senses) = obj.get("senses").and_then(|s| s.as_u64()) {
        println!("Senses: {senses}");
    }
    if let Some(relations) = obj.get("relations").and_then(|r| r.as_u64()) {
        println!("Semantic relations: {relations}");
    }
    if let Some(lexical) = obj.get("lexical_relations").and_then(|l| l.as_u64()) {
        println!("Sense-level relations: {lexical}");
    }

    if let Some(by_pos) = obj.get("synsets_by_pos").and_then(|b| b.as_object()) {
        println!();
        println!("Synsets by part of speech:");
        println!("──────────────────────────");
        for (pos, count) in by_pos {
            let formatted_count = format_value(count);
            println!("  {pos}: {formatted_count}");
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &LexnetArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexnetArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
        assert_eq!(
            format_value(&serde_json::json!(["a", "b"])),
            "[a, b]"
        );
    }

    #[test]
    fn test_lookup_output_serializes() {
        let output = LookupOutput {
            term: "dog".to_string(),
            senses: vec![SenseEntry {
                lemma: "dog".to_string(),
                pos: "noun".to_string(),
                synset: "synset#0".to_string(),
                gloss: Some("a domesticated canid".to_string()),
                relations: vec![RelationEntry {
                    name: "synonyms".to_string(),
                    lemmas: vec!["canine".to_string()],
                }],
            }],
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["term"], "dog");
        assert_eq!(value["senses"][0]["relations"][0]["lemmas"][0], "canine");
    }
}
