//! Error types for the mood engine.
//!
//! The engine either returns a complete [`crate::report::MoodResult`] or one
//! of these kinds; it never returns a partial or degraded result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Input text was absent or blank. Rejected before the classifier runs.
    #[error("text is required for mood analysis")]
    EmptyInput,

    /// The external emotion classifier failed. Propagated, never masked.
    #[error("emotion classifier failed: {0}")]
    Classifier(anyhow::Error),

    /// A raw classifier signal was missing a label or carried a score outside
    /// [0, 1]. The whole batch is rejected rather than coerced.
    #[error("malformed classifier signal: {reason}")]
    MalformedSignal { reason: String },
}

impl EngineError {
    /// Whether the failure originated in the external classifier collaborator
    /// (as opposed to the caller's input).
    pub fn is_classifier_failure(&self) -> bool {
        matches!(self, Self::Classifier(_))
    }
}
