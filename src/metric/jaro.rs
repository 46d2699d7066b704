//! Jaro and Jaro-Winkler similarity over grapheme sequences.
//!
//! Jaro similarity counts matching units found within a bounded window of
//! each other and penalizes transpositions among the matches. Jaro-Winkler
//! adds a bonus for a shared prefix of up to four units, which favors
//! strings that agree at the start — useful for names and identifiers.
//!
//! Reference fixtures from Winkler (1990):
//!
//! ```
//! use simetra::metric::jaro::jaro_winkler_similarity;
//!
//! assert!((jaro_winkler_similarity("MARTHA", "MARHTA") - 0.9611).abs() < 1e-4);
//! assert!((jaro_winkler_similarity("DWAYNE", "DUANE") - 0.8400).abs() < 1e-4);
//! ```

use crate::segment::TextSequence;

/// Scaling factor for the Winkler prefix bonus.
const WINKLER_PREFIX_SCALE: f64 = 0.1;

/// Maximum prefix length the Winkler bonus considers.
const WINKLER_MAX_PREFIX: usize = 4;

/// Jaro similarity between two strings, in `[0, 1]`.
///
/// Both strings empty yields exactly `1.0`; no matching units yields `0.0`.
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    let a = TextSequence::graphemes(a);
    let b = TextSequence::graphemes(b);
    jaro_of_units(a.units(), b.units())
}

/// Jaro-Winkler similarity between two strings, in `[0, 1]`.
///
/// Applies the standard prefix bonus of up to four units at scale 0.1 on
/// top of the Jaro score.
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    let a = TextSequence::graphemes(a);
    let b = TextSequence::graphemes(b);
    jaro_winkler_of_units(a.units(), b.units())
}

pub(crate) fn jaro_winkler_of_units(a: &[&str], b: &[&str]) -> f64 {
    let jaro = jaro_of_units(a, b);

    let prefix = a
        .iter()
        .zip(b.iter())
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();

    jaro + (prefix as f64) * WINKLER_PREFIX_SCALE * (1.0 - jaro)
}

pub(crate) fn jaro_of_units(a: &[&str], b: &[&str]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Match window: floor(max(len) / 2) - 1, never negative.
    let window = (a.len().max(b.len()) / 2).saturating_sub(1);

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, unit_a) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());

        for j in start..end {
            if b_matched[j] || unit_a != &b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk the matched units of both strings in order; each position where
    // they disagree contributes half a transposition.
    let mut mismatched_pairs = 0usize;
    let mut j = 0usize;
    for (i, matched) in a_matched.iter().enumerate() {
        if !matched {
            continue;
        }
        while !b_matched[j] {
            j += 1;
        }
        if a[i] != b[j] {
            mismatched_pairs += 1;
        }
        j += 1;
    }
    let transpositions = mismatched_pairs / 2;

    let m = matches as f64;
    let t = transpositions as f64;
    ((m / a.len() as f64) + (m / b.len() as f64) + ((m - t) / m)) / 3.0
}
