//! Love lexicon — affection and romance language.
//!
//! Unlike the other three detectors, love applies no post-boost. The raw
//! weighted sum is the score; preserve this asymmetry.

use once_cell::sync::Lazy;

use super::{Lexicon, SharedLexicon};

const PATTERNS: &[(&str, f64)] = &[
    ("in love", 0.5),
    ("soulmate", 0.5),
    ("love of my life", 0.5),
    ("my (?:love|darling|sweetheart)", 0.4),
    ("ador(?:e|es|ed|ing)", 0.4),
    ("butterflies", 0.35),
    ("heart skips", 0.35),
    ("lov(?:e|ed|ing)", 0.3),
    ("romantic|romance", 0.3),
    ("date night", 0.3),
    ("cuddl(?:e|es|ed|ing)", 0.3),
    ("kiss(?:es|ed|ing)?", 0.3),
    ("sweetheart", 0.3),
    ("affection(?:ate)?", 0.25),
    ("crush(?:es)?", 0.2),
    ("darling", 0.2),
];

static LEXICON: SharedLexicon = Lazy::new(|| Lexicon::new(PATTERNS, 1.0));

/// Love score for the text. No post-boost.
pub fn detect(text: &str) -> f64 {
    LEXICON.score(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match_is_not_boosted() {
        // weight 0.2, one match, no boost
        assert!((detect("i have a little crush") - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_phrase_and_word_both_count() {
        // "in love" (0.5) and the bare "love" inside it (0.3) are separate
        // patterns; both count.
        assert!((detect("we are in love") - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_no_match() {
        assert!(detect("the meeting ran long").abs() < f64::EPSILON);
    }
}
