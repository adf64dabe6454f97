//! Typo recognition and positional difference reporting.
//!
//! This module is the core of the library. [`is_typo`] classifies a
//! pair of strings under four fixed corruption patterns (single
//! substitution, adjacent transposition, single omission, double
//! omission) without computing a general edit distance, and
//! [`difference_report`] lists the aligned character mismatches
//! between two strings after right-padding the shorter one with
//! spaces.
//!
//! Bounding the recognizer to length deltas of at most two keeps every
//! check a single O(n) scan instead of the O(n*m) matrix a full
//! Levenshtein computation would need.

use serde::{Deserialize, Serialize};

/// The outcome of a typo classification.
///
/// When the pair is recognized, `corrected` holds the lowercased form
/// of whichever input was identified as the correct base word.
/// Comparison is case-folded throughout, so the original casing of the
/// base is not preserved; callers that need it must re-map externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoVerdict {
    /// Whether the candidate was recognized as a typo of the reference
    /// (or vice versa).
    pub is_typo: bool,
    /// The recognized base word (lowercased), present only on a match.
    pub corrected: Option<String>,
}

impl TypoVerdict {
    /// Create a verdict for a recognized typo pair.
    pub fn recognized(corrected: String) -> Self {
        TypoVerdict {
            is_typo: true,
            corrected: Some(corrected),
        }
    }

    /// Create a verdict for a pair with no typo relationship.
    pub fn rejected() -> Self {
        TypoVerdict {
            is_typo: false,
            corrected: None,
        }
    }
}

/// Positional character mismatches between two strings.
///
/// Pairs are ordered left to right; the left character of each pair
/// comes from the first input, the right from the second. The mismatch
/// count always equals the number of pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceReport {
    /// Mismatching `(char_a, char_b)` pairs in positional order.
    pub pairs: Vec<(char, char)>,
}

impl DifferenceReport {
    /// The number of mismatching positions.
    pub fn count(&self) -> usize {
        self.pairs.len()
    }

    /// Check whether the two inputs were identical.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Check whether one of the two strings is a typo of the other.
///
/// Both inputs are lowercased before comparison, and both orderings
/// are tried: the verdict carries the base word of whichever direction
/// matched first, so the boolean outcome is symmetric in its
/// arguments.
pub fn is_typo(reference: &str, candidate: &str) -> TypoVerdict {
    let reference = reference.to_lowercase();
    let candidate = candidate.to_lowercase();

    if typo_of(&reference, &candidate) {
        TypoVerdict::recognized(reference)
    } else if typo_of(&candidate, &reference) {
        TypoVerdict::recognized(candidate)
    } else {
        TypoVerdict::rejected()
    }
}

/// Single-direction recognizer: is `typo` a corruption of `base`?
///
/// Inputs must already be case-folded by the caller.
fn typo_of(base: &str, typo: &str) -> bool {
    if base == typo {
        return true;
    }

    let base_chars: Vec<char> = base.chars().collect();
    let typo_chars: Vec<char> = typo.chars().collect();
    let base_len = base_chars.len();
    let typo_len = typo_chars.len();

    if base_len == typo_len {
        let mismatches = base_chars
            .iter()
            .zip(&typo_chars)
            .filter(|(b, t)| b != t)
            .count();

        match mismatches {
            // One substituted character anywhere in the word.
            1 => true,
            // Two adjacent characters flipped.
            2 => (0..typo_len - 1).any(|i| {
                typo_chars[i] == base_chars[i + 1] && typo_chars[i + 1] == base_chars[i]
            }),
            _ => false,
        }
    } else if base_len == typo_len + 1 {
        // One character omitted from the base.
        (0..=typo_len).any(|i| {
            base_chars[..i] == typo_chars[..i] && base_chars[i + 1..] == typo_chars[i..]
        })
    } else if base_len == typo_len + 2 {
        // Two consecutive characters omitted from the base.
        (0..=typo_len).any(|i| {
            base_chars[..i] == typo_chars[..i] && base_chars[i + 2..] == typo_chars[i..]
        })
    } else {
        false
    }
}

/// Compute the positional difference report between two strings.
///
/// The shorter string is right-padded with spaces to equal character
/// length before the walk, so a padding position mismatches any
/// non-space character. A real space in the longer string aligned with
/// padding is consequently not flagged; that imprecision is inherent
/// to the padding scheme and intentionally preserved. This operation
/// is not case-folded.
pub fn difference_report(a: &str, b: &str) -> DifferenceReport {
    let mut a_chars: Vec<char> = a.chars().collect();
    let mut b_chars: Vec<char> = b.chars().collect();

    let width = a_chars.len().max(b_chars.len());
    a_chars.resize(width, ' ');
    b_chars.resize(width, ' ');

    let pairs = a_chars
        .iter()
        .zip(&b_chars)
        .filter(|(ca, cb)| ca != cb)
        .map(|(ca, cb)| (*ca, *cb))
        .collect();

    DifferenceReport { pairs }
}
