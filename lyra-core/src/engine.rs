// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Lyra-Proprietary
// See LICENSE in the repository root for full license terms.

//! MoodEngine — top-level orchestrator for mood categorization.
//!
//! Composes the category mapper, aggregator, lexicon detectors, override
//! resolver, and response assembler behind a single entry point. The engine
//! is a pure, synchronous computation per call: identical `(text, signals)`
//! inputs produce identical output, and calls share nothing but the
//! read-only lookup tables.

use anyhow::Result;

use crate::aggregate;
use crate::config::EngineConfig;
use crate::detect::DetectorScores;
use crate::error::EngineError;
use crate::report::{self, MoodResult};
use crate::signal::{self, RawSignal};

/// The external emotion classifier collaborator. Opaque to the engine;
/// failures propagate as [`EngineError::Classifier`] and are never masked.
/// Timeout and retry policy, if any, belong to the implementor.
pub trait EmotionClassifier {
    fn classify(&self, text: &str) -> Result<Vec<RawSignal>>;
}

impl<C: EmotionClassifier + ?Sized> EmotionClassifier for &C {
    fn classify(&self, text: &str) -> Result<Vec<RawSignal>> {
        (**self).classify(text)
    }
}

/// The mood categorization engine.
pub struct MoodEngine<C> {
    classifier: C,
    config: EngineConfig,
}

impl<C: EmotionClassifier> MoodEngine<C> {
    pub fn new(classifier: C) -> Self {
        Self::with_config(classifier, EngineConfig::default())
    }

    pub fn with_config(classifier: C, config: EngineConfig) -> Self {
        Self { classifier, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze a journal entry: classify, aggregate, detect, override,
    /// assemble. Blank text is rejected before the classifier is called.
    pub fn analyze_mood(&self, text: &str) -> Result<MoodResult, EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let signals = self
            .classifier
            .classify(text)
            .map_err(EngineError::Classifier)?;
        tracing::debug!(signals = signals.len(), "classifier returned raw signals");

        categorize(text, &signals, &self.config)
    }
}

/// The pure categorization core: everything downstream of the classifier.
/// Total for well-formed signals; the only failure mode is a malformed batch.
pub fn categorize(
    text: &str,
    signals: &[RawSignal],
    config: &EngineConfig,
) -> Result<MoodResult, EngineError> {
    signal::validate(signals)?;

    let aggregation = aggregate::aggregate(signals, config);
    let scores = DetectorScores::scan(text);
    tracing::trace!(
        motivation = scores.motivation,
        love = scores.love,
        heartbreak = scores.heartbreak,
        calm = scores.calm,
        "lexicon detector scores"
    );

    Ok(report::assemble(signals, aggregation, &scores, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    struct StubClassifier(Vec<RawSignal>);

    impl EmotionClassifier for StubClassifier {
        fn classify(&self, _text: &str) -> Result<Vec<RawSignal>> {
            Ok(self.0.clone())
        }
    }

    struct FailingClassifier;

    impl EmotionClassifier for FailingClassifier {
        fn classify(&self, _text: &str) -> Result<Vec<RawSignal>> {
            Err(anyhow::anyhow!("model offline"))
        }
    }

    #[test]
    fn test_blank_text_rejected_before_classifier() {
        struct PanickingClassifier;
        impl EmotionClassifier for PanickingClassifier {
            fn classify(&self, _text: &str) -> Result<Vec<RawSignal>> {
                panic!("classifier must not be called for blank input");
            }
        }

        let engine = MoodEngine::new(PanickingClassifier);
        for text in ["", "   ", "\n\t"] {
            assert!(matches!(
                engine.analyze_mood(text),
                Err(EngineError::EmptyInput)
            ));
        }
    }

    #[test]
    fn test_classifier_failure_propagates() {
        let engine = MoodEngine::new(FailingClassifier);
        match engine.analyze_mood("a perfectly ordinary day") {
            Err(EngineError::Classifier(e)) => {
                assert!(e.to_string().contains("model offline"));
            }
            other => panic!("expected Classifier error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_signal_rejects_request() {
        let engine = MoodEngine::new(StubClassifier(vec![RawSignal::new("joy", 1.2)]));
        assert!(matches!(
            engine.analyze_mood("fine day"),
            Err(EngineError::MalformedSignal { .. })
        ));
    }

    #[test]
    fn test_happy_path() {
        let engine = MoodEngine::new(StubClassifier(vec![
            RawSignal::new("joy", 0.85),
            RawSignal::new("gratitude", 0.4),
        ]));
        let result = engine.analyze_mood("what a lovely ordinary day").unwrap();
        // "lovely" does not trip the love lexicon; aggregation decides.
        assert_eq!(result.primary_mood, Category::Happy);
        assert!((result.confidence - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_signal_batch_yields_neutral() {
        let engine = MoodEngine::new(StubClassifier(Vec::new()));
        let result = engine.analyze_mood("a day without strong words").unwrap();
        assert_eq!(result.primary_mood, Category::Neutral);
        assert!(result.emotion_groups.categories.is_empty());
        assert!(result.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn test_categorize_is_idempotent() {
        let config = EngineConfig::default();
        let signals = vec![
            RawSignal::new("joy", 0.7),
            RawSignal::new("motivation", 0.5),
            RawSignal::new("sadness", 0.2),
        ];
        let text = "worked hard on my goals and it felt great";
        let a = categorize(text, &signals, &config).unwrap();
        let b = categorize(text, &signals, &config).unwrap();
        assert_eq!(a, b);
    }
}
