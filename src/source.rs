//! Word sources for dictionary resolution.
//!
//! A word source is a text blob whose tokens are separated by runs of
//! whitespace (spaces, tabs, newlines). Tokenization preserves source
//! order, which in turn drives suggestion ordering and tie-breaking in
//! the resolver.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::resolver::{self, Suggestion};

/// Split a text blob into word tokens.
///
/// Splits on runs of whitespace, discarding empty tokens and
/// preserving order.
pub fn parse_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Load a word list from a whitespace-delimited text file.
///
/// The file is read in one scoped operation; an unreadable path
/// surfaces as [`MistypeError::SourceUnavailable`].
///
/// [`MistypeError::SourceUnavailable`]: crate::error::MistypeError::SourceUnavailable
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_words(&text))
}

/// Collect suggestions for a word against a file-backed dictionary.
///
/// Identical to [`resolver::suggest`] with the dictionary loaded via
/// [`read_words`].
pub fn suggest_from_file<P: AsRef<Path>>(word: &str, path: P) -> Result<Vec<Suggestion>> {
    let words = read_words(path)?;
    Ok(resolver::suggest(word, &words))
}

/// Resolve the closest match for a word against a file-backed
/// dictionary.
///
/// Identical to [`resolver::closest`] with the dictionary loaded via
/// [`read_words`].
pub fn closest_from_file<P: AsRef<Path>>(word: &str, path: P) -> Result<String> {
    let words = read_words(path)?;
    resolver::closest(word, &words)
}
