//! Command line argument parsing for the lexnet CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::lexicon::pos::PartOfSpeech;

/// Lexnet - lexical relation enrichment for annotated text
#[derive(Parser, Debug, Clone)]
#[command(name = "lexnet")]
#[command(about = "Lexical relation enrichment for annotated text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lexnet Contributors")]
#[command(long_about = None)]
pub struct LexnetArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexnetArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Enrich an annotated document against a lexicon
    Enrich(EnrichArgs),

    /// Look up a term and print its senses with relation lists
    Lookup(LookupArgs),

    /// Show lexicon statistics
    Stats(StatsArgs),
}

/// Arguments for document enrichment
#[derive(Parser, Debug, Clone)]
pub struct EnrichArgs {
    /// Path to the lexicon file (JSON)
    #[arg(value_name = "LEXICON")]
    pub lexicon_path: PathBuf,

    /// Path to the input document (JSON, or plain text with --text)
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Treat the input as plain text instead of a JSON document
    #[arg(long)]
    pub text: bool,

    /// Annotate word tokens over the content before enriching
    #[arg(long)]
    pub tokenize: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long = "config", value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Try one lookup for the whole phrase before falling back to words
    #[arg(long)]
    pub full_match: bool,

    /// Collect the full hypernym hierarchy instead of direct hypernyms
    #[arg(long)]
    pub hierarchy: bool,

    /// Maximum senses per lookup and items per relation list
    #[arg(short, long)]
    pub truncate: Option<usize>,

    /// Minimum term length in characters
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Create new spans of this type instead of merging onto matches
    #[arg(long, value_name = "TYPE")]
    pub create_type: Option<String>,

    /// Write relation lists as structured lists instead of delimited text
    #[arg(long)]
    pub structured: bool,

    /// Print run statistics instead of the enriched document
    #[arg(long)]
    pub stats_only: bool,
}

/// Arguments for term lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Path to the lexicon file (JSON)
    #[arg(value_name = "LEXICON")]
    pub lexicon_path: PathBuf,

    /// Term to look up
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Constrain the lookup to one part of speech
    #[arg(short, long)]
    pub pos: Option<PosArg>,

    /// Maximum number of senses to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for lexicon statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the lexicon file (JSON)
    #[arg(value_name = "LEXICON")]
    pub lexicon_path: PathBuf,
}

/// Part of speech values accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosArg {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PosArg {
    /// The lexicon-level part of speech this argument names.
    pub fn to_pos(self) -> PartOfSpeech {
        match self {
            PosArg::Noun => PartOfSpeech::Noun,
            PosArg::Verb => PartOfSpeech::Verb,
            PosArg::Adjective => PartOfSpeech::Adjective,
            PosArg::Adverb => PartOfSpeech::Adverb,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
