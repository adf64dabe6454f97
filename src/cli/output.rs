//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{MistypeArgs, OutputFormat};
use crate::error::Result;
use crate::resolver::Suggestion;

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub reference: String,
    pub candidate: String,
    pub is_typo: bool,
    pub corrected: Option<String>,
}

/// Result structure for the diff command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DiffResult {
    pub count: usize,
    pub pairs: Vec<(char, char)>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub word: String,
    pub suggestions: Vec<Suggestion>,
    /// Present only when closest-match resolution was requested.
    pub closest: Option<String>,
}

/// One line of batch output.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub reference: String,
    pub candidate: String,
    pub is_typo: bool,
    pub corrected: Option<String>,
}

/// Result structure for the batch command.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
}

/// Human-readable rendering for a command result.
pub trait HumanOutput {
    /// Print the result to stdout.
    fn write_human(&self);
}

impl HumanOutput for CheckResult {
    fn write_human(&self) {
        match &self.corrected {
            Some(corrected) => {
                println!(
                    "'{}' is a typo of '{}' (corrected: {})",
                    self.candidate, self.reference, corrected
                );
            }
            None => {
                println!(
                    "'{}' is not a typo of '{}'",
                    self.candidate, self.reference
                );
            }
        }
    }
}

impl HumanOutput for DiffResult {
    fn write_human(&self) {
        println!("{} difference(s)", self.count);
        for (a, b) in &self.pairs {
            println!("  {a:?} -> {b:?}");
        }
    }
}

impl HumanOutput for SuggestResult {
    fn write_human(&self) {
        if let Some(closest) = &self.closest {
            println!("{closest}");
            return;
        }

        if self.suggestions.is_empty() {
            println!("No suggestions for '{}'", self.word);
            return;
        }

        println!("Suggestions for '{}':", self.word);
        for suggestion in &self.suggestions {
            println!("  {} (distance {})", suggestion.word, suggestion.distance);
        }
    }
}

impl HumanOutput for BatchResult {
    fn write_human(&self) {
        for entry in &self.entries {
            let verdict = if entry.is_typo {
                format!("typo -> {}", entry.corrected.as_deref().unwrap_or(""))
            } else {
                "no match".to_string()
            };
            println!("{} / {}: {}", entry.reference, entry.candidate, verdict);
        }
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &MistypeArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.write_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MistypeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
