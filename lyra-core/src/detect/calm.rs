//! Calm lexicon — stillness, rest, and mindfulness language.

use once_cell::sync::Lazy;

use super::{Lexicon, SharedLexicon, DETECTOR_BOOST};

const PATTERNS: &[(&str, f64)] = &[
    ("calm(?:ly|ness)?", 0.4),
    ("at peace", 0.4),
    ("peaceful", 0.4),
    ("seren(?:e|ity)", 0.4),
    ("tranquil(?:ity)?", 0.4),
    ("meditat(?:e|ed|ing|ion)", 0.4),
    ("zen", 0.4),
    ("relax(?:ed|ing)?", 0.35),
    ("deep breaths?", 0.3),
    ("breathing exercises?", 0.3),
    ("unwind(?:ing)?", 0.3),
    ("soothing", 0.3),
    ("mindful(?:ness)?", 0.3),
    ("content(?:ed)?", 0.25),
    ("slowed? down", 0.25),
    ("no worries", 0.25),
    ("stillness", 0.2),
    ("quiet", 0.2),
    ("restful", 0.2),
];

static LEXICON: SharedLexicon = Lazy::new(|| Lexicon::new(PATTERNS, DETECTOR_BOOST));

/// Calm score for the text. Boosted x1.5 when any pattern matched.
pub fn detect(text: &str) -> f64 {
    LEXICON.score(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match_is_boosted() {
        // weight 0.4, one match, x1.5
        assert!((detect("a calm morning") - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_mindfulness_phrases() {
        assert!(detect("took deep breaths and meditated") > 0.0);
        assert!(detect("finally slowed down this weekend") > 0.0);
    }

    #[test]
    fn test_no_match() {
        assert!(detect("traffic was terrible").abs() < f64::EPSILON);
    }
}
