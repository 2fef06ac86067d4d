// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Lyra-Proprietary
// See LICENSE in the repository root for full license terms.

//! Lexicon detectors — four independent weighted-regex scanners that read
//! the raw journal text directly, decoupled from the classifier.
//!
//! Each detector sums (non-overlapping match count x pattern weight) over
//! its lexicon. Motivation, heartbreak, and calm apply a x1.5 boost when the
//! raw sum is positive; love does not. The asymmetry is a behavioral
//! contract inherited from the reference implementation.

pub mod calm;
pub mod heartbreak;
pub mod love;
pub mod motivation;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Post-boost applied by the boosted detectors when any pattern matched.
pub(crate) const DETECTOR_BOOST: f64 = 1.5;

/// A compiled weighted lexicon. Patterns match whole words or phrases in
/// lowercased text.
pub(crate) struct Lexicon {
    patterns: Vec<(Regex, f64)>,
    boost: f64,
}

impl Lexicon {
    /// Compile a pattern table. Each entry is a regex fragment that gets
    /// wrapped in word boundaries, paired with its weight.
    pub(crate) fn new(table: &[(&str, f64)], boost: f64) -> Self {
        let patterns = table
            .iter()
            .map(|(fragment, weight)| {
                let re = Regex::new(&format!(r"\b(?:{fragment})\b"))
                    .expect("static lexicon pattern");
                (re, *weight)
            })
            .collect();
        Self { patterns, boost }
    }

    /// Score the text: matches are counted on the lowercased input, so
    /// matching is case-insensitive without touching the caller's string.
    pub(crate) fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let raw: f64 = self
            .patterns
            .iter()
            .map(|(re, weight)| re.find_iter(&lowered).count() as f64 * weight)
            .sum();
        if raw > 0.0 {
            raw * self.boost
        } else {
            0.0
        }
    }
}

/// Convenience holder for a lazily compiled lexicon.
pub(crate) type SharedLexicon = Lazy<Lexicon>;

/// The four detector scores for one text, recomputed independently per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectorScores {
    pub motivation: f64,
    pub love: f64,
    pub heartbreak: f64,
    pub calm: f64,
}

impl DetectorScores {
    /// Run all four detectors against the raw text.
    pub fn scan(text: &str) -> Self {
        Self {
            motivation: motivation::detect(text),
            love: love::detect(text),
            heartbreak: heartbreak::detect(text),
            calm: calm::detect(text),
        }
    }
}
