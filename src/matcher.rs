//! Best-match ranking of candidate strings against a query.
//!
//! [`find_best_match`] scores every candidate with the configured
//! similarity algorithm, reports all scores in input order, and identifies
//! the best match along with whether the top score is tied.
//!
//! # Examples
//!
//! ```
//! use simetra::matcher::{MatchOptions, find_best_match};
//!
//! let report = find_best_match(
//!     "kitten",
//!     &["sitting", "kitten"],
//!     &MatchOptions::default(),
//! ).unwrap();
//!
//! assert_eq!(report.best_match.string, "kitten");
//! assert_eq!(report.best_match.score, 1.0);
//! assert_eq!(report.all_matches.len(), 2);
//! assert!(!report.has_tie);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimetraError};
use crate::metric::{SimilarityAlgorithm, similarity_of_units};
use crate::segment::TextSequence;

/// Candidate lists at or above this size are scored in parallel. Scores are
/// collected in input order either way, so both paths produce identical
/// reports.
const PARALLEL_CUTOFF: usize = 128;

/// Configuration for [`find_best_match`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Similarity algorithm used to score candidates.
    pub algorithm: SimilarityAlgorithm,
    /// Informational score threshold in `[0, 1]`. It never removes entries
    /// from `all_matches`; use [`BestMatchReport::above_threshold`] to
    /// post-filter. Must be within range or the matcher rejects it.
    pub threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            algorithm: SimilarityAlgorithm::LevenshteinSimilarity,
            threshold: 0.0,
        }
    }
}

impl MatchOptions {
    /// Create options with the default algorithm and threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity algorithm.
    pub fn algorithm(mut self, algorithm: SimilarityAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the informational threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// One candidate's scoring outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The original candidate text.
    pub string: String,
    /// Similarity score against the query, in `[0, 1]`.
    pub score: f64,
}

/// Outcome of a [`find_best_match`] invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMatchReport {
    /// The highest-scoring candidate; first occurrence wins on ties.
    pub best_match: MatchResult,
    /// Every candidate's result, in the same order as the input list.
    pub all_matches: Vec<MatchResult>,
    /// Whether two or more candidates share the maximum score.
    pub has_tie: bool,
}

impl BestMatchReport {
    /// Whether the best match scored exactly `1.0`.
    pub fn is_exact(&self) -> bool {
        self.best_match.score == 1.0
    }

    /// The matches scoring at or above `threshold`, in input order.
    pub fn above_threshold(&self, threshold: f64) -> Vec<&MatchResult> {
        self.all_matches
            .iter()
            .filter(|m| m.score >= threshold)
            .collect()
    }
}

/// Score `candidates` against `query` and report the best match.
///
/// Every candidate is scored exactly once; the stored scores drive both
/// `all_matches` and the best-match/tie decisions, so tie detection compares
/// the same computed values at full floating precision.
///
/// # Errors
///
/// Returns [`SimetraError::InvalidArgument`] when `candidates` is empty or
/// `options.threshold` lies outside `[0, 1]`.
pub fn find_best_match<S>(
    query: &str,
    candidates: &[S],
    options: &MatchOptions,
) -> Result<BestMatchReport>
where
    S: AsRef<str> + Sync,
{
    if candidates.is_empty() {
        return Err(SimetraError::invalid_argument(
            "candidates must not be empty",
        ));
    }
    if !(0.0..=1.0).contains(&options.threshold) {
        return Err(SimetraError::invalid_argument(format!(
            "threshold must be in [0, 1], got {}",
            options.threshold
        )));
    }

    let query_seq = TextSequence::graphemes(query);
    let query_units = query_seq.units();
    let algorithm = options.algorithm;

    let score_one = |candidate: &str| -> f64 {
        let candidate_seq = TextSequence::graphemes(candidate);
        similarity_of_units(query_units, candidate_seq.units(), algorithm)
    };

    let scores: Vec<f64> = if candidates.len() >= PARALLEL_CUTOFF {
        candidates
            .par_iter()
            .map(|c| score_one(c.as_ref()))
            .collect()
    } else {
        candidates.iter().map(|c| score_one(c.as_ref())).collect()
    };

    // Strict comparison keeps the first occurrence on ties.
    let mut best_index = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best_index] {
            best_index = index;
        }
    }
    let best_score = scores[best_index];
    let has_tie = scores.iter().filter(|score| **score == best_score).count() > 1;

    let all_matches: Vec<MatchResult> = candidates
        .iter()
        .zip(scores)
        .map(|(candidate, score)| MatchResult {
            string: candidate.as_ref().to_string(),
            score,
        })
        .collect();

    Ok(BestMatchReport {
        best_match: all_matches[best_index].clone(),
        all_matches,
        has_tie,
    })
}

/// Reusable matcher holding a query and options, for ranking several
/// candidate lists against the same query.
#[derive(Debug, Clone)]
pub struct BestMatcher {
    query: String,
    options: MatchOptions,
}

impl BestMatcher {
    /// Create a matcher for the given query with default options.
    pub fn new<S: Into<String>>(query: S) -> Self {
        BestMatcher {
            query: query.into(),
            options: MatchOptions::default(),
        }
    }

    /// Create a matcher with custom options.
    pub fn with_options<S: Into<String>>(query: S, options: MatchOptions) -> Self {
        BestMatcher {
            query: query.into(),
            options,
        }
    }

    /// The query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The configured options.
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Score a single candidate against the query.
    pub fn score(&self, candidate: &str) -> f64 {
        crate::metric::string_similarity(&self.query, candidate, self.options.algorithm)
    }

    /// Rank `candidates` against the query.
    pub fn find_best_match<S>(&self, candidates: &[S]) -> Result<BestMatchReport>
    where
        S: AsRef<str> + Sync,
    {
        find_best_match(&self.query, candidates, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_candidate_wins() {
        let report = find_best_match(
            "kitten",
            &["sitting", "kitten"],
            &MatchOptions::default(),
        )
        .unwrap();

        assert_eq!(report.best_match.string, "kitten");
        assert_eq!(report.best_match.score, 1.0);
        assert_eq!(report.all_matches.len(), 2);
        assert!(!report.has_tie);
        assert!(report.is_exact());
    }

    #[test]
    fn test_input_order_preserved() {
        let candidates = ["sitting", "mitten", "kitten", "bitten"];
        let report =
            find_best_match("kitten", &candidates, &MatchOptions::default()).unwrap();

        let reported: Vec<&str> = report
            .all_matches
            .iter()
            .map(|m| m.string.as_str())
            .collect();
        assert_eq!(reported, candidates);
    }

    #[test]
    fn test_tie_detection() {
        // Both candidates are one edit from the query over three units.
        let report =
            find_best_match("ab", &["abc", "abd"], &MatchOptions::default()).unwrap();
        assert!(report.has_tie);
        // first occurrence wins
        assert_eq!(report.best_match.string, "abc");
    }

    #[test]
    fn test_duplicate_candidates_tie() {
        let report = find_best_match(
            "kitten",
            &["kitten", "kitten"],
            &MatchOptions::default(),
        )
        .unwrap();
        assert!(report.has_tie);
        assert_eq!(report.best_match.score, 1.0);
    }

    #[test]
    fn test_no_tie_on_distinct_scores() {
        // "ab" vs "ab" scores 1.0, "ab" vs "ba" scores 0.0 under Levenshtein.
        let report =
            find_best_match("ab", &["ab", "ba"], &MatchOptions::default()).unwrap();
        assert!(!report.has_tie);
        assert_eq!(report.best_match.string, "ab");
    }

    #[test]
    fn test_jaro_winkler_option() {
        let options = MatchOptions::new().algorithm(SimilarityAlgorithm::JaroWinkler);
        let report = find_best_match("kitten", &["sitting", "kitten"], &options).unwrap();
        assert_eq!(report.best_match.string, "kitten");
        assert_eq!(report.best_match.score, 1.0);
    }

    #[test]
    fn test_empty_candidates_is_error() {
        let candidates: [&str; 0] = [];
        let err = find_best_match("kitten", &candidates, &MatchOptions::default())
            .unwrap_err();
        assert!(matches!(err, SimetraError::InvalidArgument(_)));
    }

    #[test]
    fn test_threshold_out_of_range_is_error() {
        for threshold in [-0.1, 1.1, f64::NAN] {
            let options = MatchOptions::new().threshold(threshold);
            let result = find_best_match("kitten", &["sitting"], &options);
            assert!(result.is_err(), "threshold {threshold} accepted");
        }
    }

    #[test]
    fn test_threshold_does_not_filter() {
        let options = MatchOptions::new().threshold(0.8);
        let report =
            find_best_match("kitten", &["sitting", "kitten"], &options).unwrap();
        assert_eq!(report.all_matches.len(), 2);

        let filtered = report.above_threshold(options.threshold);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].string, "kitten");
    }

    #[test]
    fn test_empty_query() {
        let report =
            find_best_match("", &["a", ""], &MatchOptions::default()).unwrap();
        assert_eq!(report.all_matches[0].score, 0.0);
        assert_eq!(report.all_matches[1].score, 1.0);
        assert_eq!(report.best_match.string, "");
    }

    #[test]
    fn test_grapheme_candidates() {
        let report = find_best_match(
            "cafe\u{301}",
            &["cafe", "cave"],
            &MatchOptions::default(),
        )
        .unwrap();
        // one substitution out of four units
        assert!((report.all_matches[0].score - 0.75).abs() < 1e-9);
        assert_eq!(report.best_match.string, "cafe");
    }

    #[test]
    fn test_parallel_path_matches_serial() {
        // Enough candidates to cross the parallel cutoff.
        let candidates: Vec<String> = (0..PARALLEL_CUTOFF * 2)
            .map(|i| format!("candidate-{i}"))
            .chain(std::iter::once("kitten".to_string()))
            .collect();
        let report =
            find_best_match("kitten", &candidates, &MatchOptions::default()).unwrap();

        assert_eq!(report.all_matches.len(), candidates.len());
        assert_eq!(report.best_match.string, "kitten");
        assert_eq!(report.best_match.score, 1.0);

        // Serial scoring of the same list must agree entry by entry.
        for (result, candidate) in report.all_matches.iter().zip(&candidates) {
            let serial = crate::metric::string_similarity(
                "kitten",
                candidate,
                SimilarityAlgorithm::LevenshteinSimilarity,
            );
            assert_eq!(result.score, serial);
        }
    }

    #[test]
    fn test_best_matcher_reuse() {
        let matcher = BestMatcher::with_options(
            "martha",
            MatchOptions::new().algorithm(SimilarityAlgorithm::JaroWinkler),
        );

        assert_eq!(matcher.query(), "martha");
        assert_eq!(matcher.score("martha"), 1.0);
        assert!(matcher.score("marhta") > matcher.score("dwayne"));

        let report = matcher.find_best_match(&["marhta", "dwayne"]).unwrap();
        assert_eq!(report.best_match.string, "marhta");
    }
}
