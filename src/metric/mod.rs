//! String distance and similarity metrics.
//!
//! This module houses the distance engine ([`levenshtein`]) and the
//! similarity engine: [`string_similarity`] dispatches on
//! [`SimilarityAlgorithm`] and always returns a score in `[0, 1]`, where
//! `1.0` means identical and `0.0` means maximally different.

pub mod jaro;
pub mod levenshtein;

use serde::{Deserialize, Serialize};

use crate::segment::TextSequence;

pub use jaro::{jaro_similarity, jaro_winkler_similarity};
pub use levenshtein::{
    damerau_levenshtein_distance, levenshtein_distance, levenshtein_distance_threshold,
    levenshtein_similarity,
};

/// Similarity scoring algorithm.
///
/// A closed set: the similarity engine dispatches exhaustively, so adding an
/// algorithm requires an explicit new arm rather than any silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SimilarityAlgorithm {
    /// Levenshtein distance normalized by the longer input's length.
    #[default]
    LevenshteinSimilarity,
    /// Jaro similarity with the Winkler shared-prefix bonus.
    JaroWinkler,
}

impl SimilarityAlgorithm {
    /// Human-readable name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            SimilarityAlgorithm::LevenshteinSimilarity => "levenshtein",
            SimilarityAlgorithm::JaroWinkler => "jaro_winkler",
        }
    }
}

/// Similarity score between two strings in `[0, 1]` under the given
/// algorithm.
///
/// Both algorithms share the empty-string conventions: two empty inputs
/// score exactly `1.0`, one empty and one non-empty score exactly `0.0`.
///
/// # Examples
///
/// ```
/// use simetra::metric::{SimilarityAlgorithm, string_similarity};
///
/// let score = string_similarity(
///     "kitten",
///     "sitting",
///     SimilarityAlgorithm::LevenshteinSimilarity,
/// );
/// assert!((score - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
/// ```
pub fn string_similarity(a: &str, b: &str, algorithm: SimilarityAlgorithm) -> f64 {
    let a = TextSequence::graphemes(a);
    let b = TextSequence::graphemes(b);
    similarity_of_units(a.units(), b.units(), algorithm)
}

/// Dispatch over already-segmented unit slices. The matcher segments the
/// query once and calls this per candidate.
pub(crate) fn similarity_of_units(a: &[&str], b: &[&str], algorithm: SimilarityAlgorithm) -> f64 {
    match algorithm {
        SimilarityAlgorithm::LevenshteinSimilarity => levenshtein::similarity_of_units(a, b),
        SimilarityAlgorithm::JaroWinkler => jaro::jaro_winkler_of_units(a, b),
    }
}
