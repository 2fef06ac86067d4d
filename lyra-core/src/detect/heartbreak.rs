//! Heartbreak lexicon — breakup, betrayal, and loss language.

use once_cell::sync::Lazy;

use super::{Lexicon, SharedLexicon, DETECTOR_BOOST};

const PATTERNS: &[(&str, f64)] = &[
    ("heartbr(?:eak|oken)", 0.6),
    ("broken heart", 0.6),
    ("broke up|break(?:ing)? up|breakup", 0.5),
    ("dumped", 0.5),
    ("cheated on", 0.5),
    ("it'?s over between", 0.5),
    ("can'?t stop crying", 0.4),
    ("betray(?:ed|al)", 0.4),
    ("divorced?", 0.4),
    ("devastated", 0.4),
    ("never see (?:him|her|them) again", 0.4),
    ("moved on without me", 0.4),
    ("ex[- ](?:boyfriend|girlfriend|partner|wife|husband)", 0.3),
    ("miss(?:es|ing)? (?:him|her|them)", 0.3),
    ("shattered", 0.3),
    ("tears", 0.2),
];

static LEXICON: SharedLexicon = Lazy::new(|| Lexicon::new(PATTERNS, DETECTOR_BOOST));

/// Heartbreak score for the text. Boosted x1.5 when any pattern matched.
pub fn detect(text: &str) -> f64 {
    LEXICON.score(text)
}
