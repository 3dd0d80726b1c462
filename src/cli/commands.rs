//! Command implementations for the lexnet CLI.

use crate::annotation::document::{DEFAULT_SET, Document};
use crate::annotation::tokenize::annotate_words;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::enrich::aggregator;
use crate::enrich::config::{EnricherConfig, ListFormat};
use crate::enrich::enricher::Enricher;
use crate::enrich::resolver::{Resolution, Resolver};
use crate::error::Result;
use crate::lexicon::memory::MemoryLexicon;
use crate::lexicon::pos::PartOfSpeech;
use log::warn;
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use std::time::Instant;

/// Execute a CLI command.
pub fn execute_command(args: LexnetArgs) -> Result<()> {
    match &args.command {
        Command::Enrich(enrich_args) => enrich_document(enrich_args.clone(), &args),
        Command::Lookup(lookup_args) => lookup_term(lookup_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Enrich a document against a lexicon.
fn enrich_document(args: EnrichArgs, cli_args: &LexnetArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Enriching document: {}", args.input_path.display());
        println!("Against lexicon: {}", args.lexicon_path.display());
    }

    let config = load_config(&args)?;

    // A lexicon that fails to load disables the engine instead of aborting.
    let enricher = match MemoryLexicon::load_from_file(&args.lexicon_path.to_string_lossy()) {
        Ok(lexicon) => Enricher::new(config, Arc::new(lexicon))?,
        Err(e) => {
            warn!("failed to load lexicon, enrichment disabled: {e}");
            Enricher::disabled(config)
        }
    };

    let mut doc = load_document(&args)?;

    if args.tokenize {
        let added = annotate_words(&mut doc, DEFAULT_SET, "Token");
        if cli_args.verbosity() > 1 {
            println!("Annotated {added} word tokens");
        }
    }

    let start_time = Instant::now();
    let stats = enricher.enrich(&mut doc)?;
    if cli_args.verbosity() > 1 {
        let duration = start_time.elapsed();
        println!("Enrichment took {duration:?}");
    }

    if args.stats_only {
        output_result("Enrichment complete", &stats, cli_args)
    } else {
        output_result(
            "Enrichment complete",
            &EnrichmentOutput {
                document: doc,
                stats,
            },
            cli_args,
        )
    }
}

/// Look up a term and print its senses.
fn lookup_term(args: LookupArgs, cli_args: &LexnetArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!(
            "Looking up '{}' in {}",
            args.term,
            args.lexicon_path.display()
        );
    }

    let lexicon = MemoryLexicon::load_from_file(&args.lexicon_path.to_string_lossy())?;
    let resolver = Resolver::new(&lexicon, false, args.limit);
    let resolution = match args.pos {
        Some(pos) => resolver.resolve_pos(&args.term, pos.to_pos())?,
        None => resolver.resolve(&args.term, PartOfSpeech::Noun)?,
    };
    let senses = match resolution {
        Resolution::Matched(senses) => senses,
        Resolution::NoMatch => Vec::new(),
    };

    let config = EnricherConfig {
        add_gloss: true,
        truncate: args.limit,
        ..EnricherConfig::default()
    };
    let mut entries = Vec::new();
    for sense in &senses {
        let report = aggregator::aggregate(&lexicon, &config, sense)?;
        entries.push(SenseEntry {
            lemma: sense.lemma.clone(),
            pos: sense.pos.name().to_string(),
            synset: sense.synset.to_string(),
            gloss: report.gloss.clone(),
            relations: report
                .lists
                .iter()
                .map(|(name, lemmas)| RelationEntry {
                    name: name.to_string(),
                    lemmas: lemmas.clone(),
                })
                .collect(),
        });
    }

    output_result(
        &format!("Found {} senses", entries.len()),
        &LookupOutput {
            term: args.term.clone(),
            senses: entries,
        },
        cli_args,
    )
}

/// Show lexicon statistics.
fn show_stats(args: StatsArgs, cli_args: &LexnetArgs) -> Result<()> {
    let lexicon = MemoryLexicon::load_from_file(&args.lexicon_path.to_string_lossy())?;

    let mut synsets_by_pos = HashMap::new();
    for pos in PartOfSpeech::ALL {
        let count = lexicon.synset_count_for(pos);
        if count > 0 {
            synsets_by_pos.insert(pos.name().to_string(), count);
        }
    }

    output_result(
        "Lexicon loaded",
        &LexiconSummary {
            path: args.lexicon_path.to_string_lossy().to_string(),
            synsets: lexicon.synset_count(),
            senses: lexicon.sense_count(),
            relations: lexicon.relation_count(),
            lexical_relations: lexicon.lexical_relation_count(),
            synsets_by_pos,
        },
        cli_args,
    )
}

/// Apply command line overrides on top of the configured or default engine
/// settings.
fn load_config(args: &EnrichArgs) -> Result<EnricherConfig> {
    let mut config = match &args.config_file {
        Some(path) => EnricherConfig::load_from_file(&path.to_string_lossy())?,
        None => EnricherConfig::default(),
    };
    if args.full_match {
        config.attempt_full_match = true;
    }
    if args.hierarchy {
        config.full_hypernym_hierarchy = true;
    }
    if let Some(truncate) = args.truncate {
        config.truncate = truncate;
    }
    if let Some(min_length) = args.min_length {
        config.min_word_length = min_length;
    }
    if let Some(create_type) = &args.create_type {
        config.output_type = Some(create_type.clone());
    }
    if args.structured {
        config.output.format = ListFormat::Structured;
    }
    Ok(config)
}

/// Read the input document, as serialized JSON or raw text.
fn load_document(args: &EnrichArgs) -> Result<Document> {
    let content = fs::read_to_string(&args.input_path)?;
    if args.text {
        Ok(Document::new(content))
    } else {
        let doc = serde_json::from_str(&content)?;
        Ok(doc)
    }
}
