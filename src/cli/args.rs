//! Command line argument parsing for the Mistype CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Mistype - A lightweight typo detection and correction checker
#[derive(Parser, Debug, Clone)]
#[command(name = "mistype")]
#[command(about = "A lightweight typo detection and correction checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MistypeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
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

impl MistypeArgs {
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
    /// Check whether a candidate is a typo of a reference word
    Check(CheckArgs),

    /// Show the positional character differences between two strings
    Diff(DiffArgs),

    /// Suggest corrections for a word from a dictionary file
    Suggest(SuggestArgs),

    /// Check reference/candidate pairs read from a file
    Batch(BatchArgs),
}

/// Arguments for checking a single pair
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// The known-correct reference word
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// The candidate string to classify
    #[arg(value_name = "CANDIDATE")]
    pub candidate: String,
}

/// Arguments for the difference report
#[derive(Parser, Debug, Clone)]
pub struct DiffArgs {
    /// First string
    #[arg(value_name = "A")]
    pub a: String,

    /// Second string
    #[arg(value_name = "B")]
    pub b: String,
}

/// Arguments for dictionary suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// The possibly misspelled word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Path to a whitespace-delimited dictionary file
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Return only the closest match
    #[arg(short, long)]
    pub closest: bool,
}

/// Arguments for batch pair checking
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Path to a file with one "reference candidate" pair per line
    #[arg(value_name = "PAIRS_FILE")]
    pub pairs_file: PathBuf,
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
