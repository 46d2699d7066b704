//! Levenshtein edit distance over grapheme sequences.
//!
//! All functions segment their inputs into grapheme clusters first, so
//! multi-codepoint characters count as single edit units:
//!
//! ```
//! use simetra::metric::levenshtein::levenshtein_distance;
//!
//! // "é" as 'e' + combining accent is one substitution away from "e".
//! assert_eq!(levenshtein_distance("cafe\u{301}", "cafe"), 1);
//! ```

use std::cmp::min;

use crate::segment::TextSequence;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-unit insertions, deletions, or
/// substitutions required to change one string into the other, where a unit
/// is a grapheme cluster.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a = TextSequence::graphemes(a);
    let b = TextSequence::graphemes(b);
    distance_of_units(a.units(), b.units())
}

/// Calculate Levenshtein distance with a maximum threshold for early
/// termination. Returns `None` if the distance exceeds the threshold, which
/// is more efficient when filtering many candidates.
pub fn levenshtein_distance_threshold(a: &str, b: &str, threshold: usize) -> Option<usize> {
    let a = TextSequence::graphemes(a);
    let b = TextSequence::graphemes(b);
    distance_of_units_threshold(a.units(), b.units(), threshold)
}

/// Calculate Damerau-Levenshtein distance, which also counts transpositions
/// of adjacent units as single edits. More accurate for real-world typos
/// where neighboring characters are swapped.
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> usize {
    let a = TextSequence::graphemes(a);
    let b = TextSequence::graphemes(b);
    let a = a.units();
    let b = b.units();

    let (len_a, len_b) = (a.len(), b.len());
    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    // Transposition lookback needs row i-2, so keep the full matrix.
    let mut matrix = vec![vec![0usize; len_b + 1]; len_a + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=len_b {
        matrix[0][j] = j;
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            let mut cell = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                cell = min(cell, matrix[i - 2][j - 2] + cost); // transposition
            }

            matrix[i][j] = cell;
        }
    }

    matrix[len_a][len_b]
}

/// Normalized Levenshtein similarity in `[0, 1]`.
///
/// Defined as `1 - d / max_len` where lengths are in grapheme units.
/// Returns exactly `1.0` when both strings are empty and `0.0` when exactly
/// one is empty.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let a = TextSequence::graphemes(a);
    let b = TextSequence::graphemes(b);
    similarity_of_units(a.units(), b.units())
}

/// Normalized Levenshtein similarity over already-segmented unit slices.
pub(crate) fn similarity_of_units<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    let distance = distance_of_units(a, b);
    1.0 - (distance as f64 / max_len as f64)
}

/// Edit distance over abstract comparable unit slices.
///
/// Uses a rolling pair of rows, so space is O(min(len(a), len(b))).
pub(crate) fn distance_of_units<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Roll over the shorter sequence.
    let (a, b) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0usize; b.len() + 1];

    for (i, unit_a) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, unit_b) in b.iter().enumerate() {
            let cost = usize::from(unit_a != unit_b);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

pub(crate) fn distance_of_units_threshold<T: PartialEq>(
    a: &[T],
    b: &[T],
    threshold: usize,
) -> Option<usize> {
    // A length difference alone already forces that many edits.
    if a.len().abs_diff(b.len()) > threshold {
        return None;
    }

    if a.is_empty() || b.is_empty() {
        let distance = a.len().max(b.len());
        return (distance <= threshold).then_some(distance);
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0usize; b.len() + 1];

    for (i, unit_a) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, unit_b) in b.iter().enumerate() {
            let cost = usize::from(unit_a != unit_b);
            curr_row[j + 1] = min(
                min(prev_row[j + 1] + 1, curr_row[j] + 1),
                prev_row[j] + cost,
            );
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Every cell in later rows can only grow from here.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[b.len()];
    (distance <= threshold).then_some(distance)
}
