//! Raw classifier signals — the `(label, score)` pairs the external emotion
//! classifier emits for one text, plus batch validation and the confidence
//! selection rule.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One `(label, score)` pair from the external classifier. Scores are
/// independent confidences in [0, 1] and do not sum to 1. Duplicate labels
/// are tolerated; each occurrence contributes independently downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSignal {
    pub label: String,
    pub score: f64,
}

impl RawSignal {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Validate a whole signal batch. A single malformed pair rejects the batch:
/// downstream boosting and normalization assume well-formed input.
pub fn validate(signals: &[RawSignal]) -> Result<(), EngineError> {
    for (i, signal) in signals.iter().enumerate() {
        if signal.label.trim().is_empty() {
            return Err(EngineError::MalformedSignal {
                reason: format!("signal {i} has an empty label"),
            });
        }
        if !signal.score.is_finite() || !(0.0..=1.0).contains(&signal.score) {
            return Err(EngineError::MalformedSignal {
                reason: format!(
                    "signal {i} ({}) score {} outside [0, 1]",
                    signal.label, signal.score
                ),
            });
        }
    }
    Ok(())
}

/// Confidence of the strongest single raw signal, scaled x100 and rounded to
/// 2 decimals. Deliberately decoupled from aggregation: this answers "how
/// sure was the classifier about its strongest signal", not "which category
/// won". Unfiltered and unboosted by design.
pub fn confidence(signals: &[RawSignal]) -> f64 {
    let max = signals.iter().fold(0.0_f64, |acc, s| acc.max(s.score));
    round2(max * 100.0)
}

/// Round to 2 decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
