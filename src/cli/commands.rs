//! Command implementations for the Mistype CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{MistypeError, Result};
use crate::matcher::{difference_report, is_typo};
use crate::resolver::check_pairs;
use crate::source;

/// Execute a CLI command.
pub fn execute_command(args: MistypeArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check(check_args.clone(), &args),
        Command::Diff(diff_args) => diff(diff_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest(suggest_args.clone(), &args),
        Command::Batch(batch_args) => batch(batch_args.clone(), &args),
    }
}

/// Classify a single reference/candidate pair.
fn check(args: CheckArgs, cli_args: &MistypeArgs) -> Result<()> {
    let verdict = is_typo(&args.reference, &args.candidate);

    let result = CheckResult {
        reference: args.reference,
        candidate: args.candidate,
        is_typo: verdict.is_typo,
        corrected: verdict.corrected,
    };

    output_result(&result, cli_args)
}

/// Report the positional differences between two strings.
fn diff(args: DiffArgs, cli_args: &MistypeArgs) -> Result<()> {
    let report = difference_report(&args.a, &args.b);

    let result = DiffResult {
        count: report.count(),
        pairs: report.pairs,
    };

    output_result(&result, cli_args)
}

/// Suggest corrections from a dictionary file.
fn suggest(args: SuggestArgs, cli_args: &MistypeArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", args.dictionary.display());
    }

    let result = if args.closest {
        let closest = source::closest_from_file(&args.word, &args.dictionary)?;
        SuggestResult {
            word: args.word,
            suggestions: Vec::new(),
            closest: Some(closest),
        }
    } else {
        let suggestions = source::suggest_from_file(&args.word, &args.dictionary)?;
        SuggestResult {
            word: args.word,
            suggestions,
            closest: None,
        }
    };

    output_result(&result, cli_args)
}

/// Check reference/candidate pairs read from a file.
fn batch(args: BatchArgs, cli_args: &MistypeArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.pairs_file)?;

    let mut pairs = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(reference), Some(candidate)) => {
                pairs.push((reference.to_string(), candidate.to_string()));
            }
            _ => {
                return Err(MistypeError::other(format!(
                    "line {} of {}: expected 'reference candidate'",
                    line_number + 1,
                    args.pairs_file.display()
                )));
            }
        }
    }

    let (flags, corrections) = check_pairs(&pairs);

    let entries = pairs
        .into_iter()
        .zip(flags)
        .zip(corrections)
        .map(|(((reference, candidate), is_typo), corrected)| BatchEntry {
            reference,
            candidate,
            is_typo,
            corrected,
        })
        .collect();

    output_result(&BatchResult { entries }, cli_args)
}
