//! Motivation lexicon — goal-pursuit and drive language.

use once_cell::sync::Lazy;

use super::{Lexicon, SharedLexicon, DETECTOR_BOOST};

const PATTERNS: &[(&str, f64)] = &[
    ("never giv(?:e|ing) up", 0.5),
    ("won't give up", 0.5),
    ("motivat(?:ed|ion|ing)", 0.4),
    ("determin(?:ed|ation)", 0.4),
    ("unstoppable", 0.4),
    ("(?:crushed|nailed) it", 0.4),
    ("push(?:ed|ing)? myself", 0.4),
    ("ambiti(?:on|ous)", 0.3),
    ("driven", 0.3),
    ("inspir(?:ed|ing|ation)", 0.3),
    ("productive", 0.3),
    ("goals?", 0.3),
    ("achiev(?:e|ed|ing|ement)", 0.3),
    ("work(?:ed|ing)? hard", 0.3),
    ("disciplined?", 0.3),
    ("focused", 0.25),
    ("hustl(?:e|ing)", 0.25),
    ("progress", 0.2),
    ("grind", 0.2),
];

static LEXICON: SharedLexicon = Lazy::new(|| Lexicon::new(PATTERNS, DETECTOR_BOOST));

/// Motivation score for the text. Boosted x1.5 when any pattern matched.
pub fn detect(text: &str) -> f64 {
    LEXICON.score(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match_is_boosted() {
        // weight 0.4, one match, x1.5 post-boost
        assert!((detect("feeling motivated today") - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_multiple_patterns_sum_before_boost() {
        // determined (0.4) + goals (0.3) = 0.7, then x1.5
        let score = detect("determined to hit my goals");
        assert!((score - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_no_match() {
        assert!(detect("we ate sandwiches").abs() < f64::EPSILON);
    }

    #[test]
    fn test_phrase_patterns() {
        assert!(detect("i will never give up on this") > 0.0);
        assert!(detect("pushed myself at the gym") > 0.0);
    }
}
