//! Dictionary-backed typo resolution.
//!
//! Applies the matcher against an ordered sequence of known-correct
//! words to produce suggestions, and resolves the single closest match
//! with a deterministic tie-break. The dictionary is any ordered slice
//! of words; duplicates are allowed and order is significant, both for
//! the order of [`suggest`] output and for tie-breaking in
//! [`closest`].

use serde::{Deserialize, Serialize};

use crate::error::{MistypeError, Result};
use crate::matcher::{difference_report, is_typo};

/// A correction suggestion drawn from a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The dictionary entry, verbatim.
    pub word: String,
    /// Positional difference count between the entry and the checked
    /// word, computed on the original (non-folded) strings.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize) -> Self {
        Suggestion { word, distance }
    }
}

/// Check multiple reference/candidate pairs at once.
///
/// Returns two vectors aligned with the input: per-pair booleans and
/// the corrected word for each recognized pair (`None` where the pair
/// was not a typo). Input order is preserved and every pair is
/// evaluated independently.
pub fn check_pairs<S: AsRef<str>>(pairs: &[(S, S)]) -> (Vec<bool>, Vec<Option<String>>) {
    let mut flags = Vec::with_capacity(pairs.len());
    let mut corrections = Vec::with_capacity(pairs.len());

    for (reference, candidate) in pairs {
        let verdict = is_typo(reference.as_ref(), candidate.as_ref());
        flags.push(verdict.is_typo);
        corrections.push(verdict.corrected);
    }

    (flags, corrections)
}

/// Collect every dictionary entry that the word could be a typo of.
///
/// Entries are tested in dictionary order and the output preserves
/// that order; it is not sorted by distance. The recorded distance is
/// the difference count against the raw entry and word, so it can
/// exceed the count a case-folded comparison would give.
pub fn suggest<S: AsRef<str>>(word: &str, dictionary: &[S]) -> Vec<Suggestion> {
    dictionary
        .iter()
        .map(AsRef::as_ref)
        .filter(|entry| is_typo(entry, word).is_typo)
        .map(|entry| Suggestion::new(entry.to_string(), difference_report(entry, word).count()))
        .collect()
}

/// Resolve the single dictionary entry closest to the word.
///
/// Among all qualifying suggestions the minimum difference count wins.
/// When several entries tie on distance, the one with the longest
/// common leading run against the word is chosen; if that score also
/// ties, the entry seen first in dictionary order wins. Returns
/// [`MistypeError::EmptyResult`] when no entry qualifies.
pub fn closest<S: AsRef<str>>(word: &str, dictionary: &[S]) -> Result<String> {
    let suggestions = suggest(word, dictionary);

    let min_distance = suggestions
        .iter()
        .map(|s| s.distance)
        .min()
        .ok_or_else(|| {
            MistypeError::empty_result(format!("no dictionary entry is close to '{word}'"))
        })?;

    // Only a strictly longer leading run displaces the current winner,
    // so entries tied on both distance and run resolve to the first
    // one in dictionary order.
    let mut best: Option<(&str, usize)> = None;
    for suggestion in suggestions.iter().filter(|s| s.distance == min_distance) {
        let run = leading_run(&suggestion.word, word);
        if best.is_none_or(|(_, best_run)| run > best_run) {
            best = Some((&suggestion.word, run));
        }
    }

    match best {
        Some((winner, _)) => Ok(winner.to_string()),
        // Unreachable: min_distance implies at least one tied entry.
        None => Err(MistypeError::empty_result(format!(
            "no dictionary entry is close to '{word}'"
        ))),
    }
}

/// Length of the common leading run of two strings.
///
/// Counts matching characters from position 0 and stops at the first
/// mismatch; a mismatch at position 0 scores zero.
fn leading_run(candidate: &str, word: &str) -> usize {
    candidate
        .chars()
        .zip(word.chars())
        .take_while(|(a, b)| a == b)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_check_pairs() {
        let pairs = [("hello", "hlelo"), ("hello", "world"), ("hello", "hallo")];
        let (flags, corrections) = check_pairs(&pairs);

        assert_eq!(flags, vec![true, false, true]);
        assert_eq!(
            corrections,
            vec![Some("hello".to_string()), None, Some("hello".to_string())]
        );
    }

    #[test]
    fn test_check_pairs_empty() {
        let pairs: Vec<(&str, &str)> = Vec::new();
        let (flags, corrections) = check_pairs(&pairs);
        assert!(flags.is_empty());
        assert!(corrections.is_empty());
    }

    #[test]
    fn test_suggest() {
        let dict = dictionary(&["hello", "world", "the"]);
        let suggestions = suggest("teh", &dict);
        assert_eq!(suggestions, vec![Suggestion::new("the".to_string(), 2)]);
    }

    #[test]
    fn test_suggest_preserves_dictionary_order() {
        let dict = dictionary(&["hello", "world", "the", "eth"]);
        let suggestions = suggest("teh", &dict);
        assert_eq!(
            suggestions,
            vec![
                Suggestion::new("the".to_string(), 2),
                Suggestion::new("eth".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_suggest_no_matches() {
        let dict = dictionary(&["completely", "unrelated"]);
        assert!(suggest("teh", &dict).is_empty());
    }

    #[test]
    fn test_closest_single_minimum() {
        let dict = dictionary(&["hello", "world", "the"]);
        assert_eq!(closest("teh", &dict).unwrap(), "the");
    }

    #[test]
    fn test_closest_prefers_longer_leading_run() {
        // "the" and "tehee" both sit at distance 2, but "tehee" shares
        // a three-char leading run with the word.
        let dict = dictionary(&["hello", "world", "the", "tehee"]);
        assert_eq!(closest("teh", &dict).unwrap(), "tehee");
    }

    #[test]
    fn test_closest_tie_break_leading_run() {
        // Both at distance 2; "the" matches the word at position 0
        // (run 1) while "eth" mismatches immediately (run 0).
        let dict = dictionary(&["eth", "the"]);
        assert_eq!(closest("teh", &dict).unwrap(), "the");
    }

    #[test]
    fn test_closest_tie_break_is_deterministic() {
        // "tea" and "tee" tie on distance 1 and leading run 2: the
        // entry seen first in dictionary order wins.
        let dict = dictionary(&["tea", "tee"]);
        assert_eq!(closest("teh", &dict).unwrap(), "tea");

        let reversed = dictionary(&["tee", "tea"]);
        assert_eq!(closest("teh", &reversed).unwrap(), "tee");
    }

    #[test]
    fn test_closest_empty_result() {
        let dict = dictionary(&["completely", "unrelated"]);
        let err = closest("teh", &dict).unwrap_err();
        assert!(matches!(err, MistypeError::EmptyResult(_)));

        let empty: Vec<String> = Vec::new();
        let err = closest("teh", &empty).unwrap_err();
        assert!(matches!(err, MistypeError::EmptyResult(_)));
    }

    #[test]
    fn test_leading_run() {
        assert_eq!(leading_run("the", "teh"), 1);
        assert_eq!(leading_run("eth", "teh"), 0);
        assert_eq!(leading_run("tehee", "teh"), 3);
        assert_eq!(leading_run("same", "same"), 4);
    }

    #[test]
    fn test_idempotence() {
        let dict = dictionary(&["hello", "world", "the", "eth"]);
        assert_eq!(suggest("teh", &dict), suggest("teh", &dict));
        assert_eq!(
            closest("teh", &dict).unwrap(),
            closest("teh", &dict).unwrap()
        );
    }
}
