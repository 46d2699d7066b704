//! Text segmentation into comparable units.
//!
//! The distance and similarity engines never index raw code units. Input
//! strings are first decomposed into grapheme clusters (user-perceived
//! characters) following Unicode Standard Annex #29, so that a base letter
//! plus combining accent, or a multi-codepoint emoji, counts as one unit.
//!
//! Segmentation is a pluggable seam: the engines only see the ordered unit
//! slice a [`Segmenter`] produces, so an alternative segmentation (words,
//! code points) can be swapped in without touching the metric code.
//!
//! # Examples
//!
//! ```
//! use simetra::segment::TextSequence;
//!
//! // "é" written as 'e' + U+0301 is a single grapheme cluster.
//! let seq = TextSequence::graphemes("cafe\u{301}");
//! assert_eq!(seq.len(), 4);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Splits a string into an ordered sequence of comparable units.
pub trait Segmenter {
    /// Segment `text` into units, in order, borrowing from the input.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Segments text into extended grapheme clusters (UAX #29).
///
/// This is the default segmenter. It keeps combining sequences and
/// surrogate-pair characters together as single units.
#[derive(Clone, Debug, Default)]
pub struct GraphemeSegmenter;

impl GraphemeSegmenter {
    /// Create a new grapheme segmenter.
    pub fn new() -> Self {
        GraphemeSegmenter
    }
}

impl Segmenter for GraphemeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.graphemes(true).collect()
    }
}

/// An immutable ordered sequence of grapheme clusters borrowed from an
/// input string.
///
/// Length is the count of grapheme clusters, not bytes or `char`s. Two
/// strings with equal content produce equal sequences regardless of how the
/// text is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSequence<'a> {
    units: Vec<&'a str>,
}

impl<'a> TextSequence<'a> {
    /// Build a sequence using the default grapheme segmenter.
    pub fn graphemes(text: &'a str) -> Self {
        Self::with_segmenter(text, &GraphemeSegmenter)
    }

    /// Build a sequence using a custom segmenter.
    pub fn with_segmenter<S: Segmenter + ?Sized>(text: &'a str, segmenter: &S) -> Self {
        TextSequence {
            units: segmenter.segment(text),
        }
    }

    /// Number of units in the sequence.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the sequence contains no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The units as an ordered slice.
    pub fn units(&self) -> &[&'a str] {
        &self.units
    }

    /// The unit at position `index`, if any.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.units.get(index).copied()
    }
}
