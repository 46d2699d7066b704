//! # simetra
//!
//! Grapheme-aware string distance, similarity scoring, and best-match
//! ranking for Rust.
//!
//! ## Features
//!
//! - Levenshtein edit distance over grapheme clusters (UAX #29), so
//!   accented letters and multi-codepoint emoji count as single units
//! - Normalized Levenshtein and Jaro-Winkler similarity in `[0, 1]`
//! - Best-match ranking of candidate lists with first-occurrence tie
//!   breaking and explicit tie detection
//! - Pure, deterministic computation; large candidate lists are scored in
//!   parallel with identical results
//!
//! ## Quick start
//!
//! ```
//! use simetra::{MatchOptions, find_best_match, levenshtein_distance};
//!
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//!
//! let report = find_best_match(
//!     "kitten",
//!     &["sitting", "kitten", "mitten"],
//!     &MatchOptions::default(),
//! ).unwrap();
//! assert_eq!(report.best_match.string, "kitten");
//! ```

pub mod error;
pub mod matcher;
pub mod metric;
pub mod segment;

pub use error::{Result, SimetraError};
pub use matcher::{BestMatchReport, BestMatcher, MatchOptions, MatchResult, find_best_match};
pub use metric::{
    SimilarityAlgorithm, damerau_levenshtein_distance, jaro_similarity, jaro_winkler_similarity,
    levenshtein_distance, levenshtein_distance_threshold, levenshtein_similarity,
    string_similarity,
};
pub use segment::{GraphemeSegmenter, Segmenter, TextSequence};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
