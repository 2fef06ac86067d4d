// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Lyra-Proprietary
// See LICENSE in the repository root for full license terms.

//! Response assembly — builds the final [`MoodResult`] from the aggregation,
//! the detector scores, and the raw signals.
//!
//! Serialized field names are a wire contract with JSON-speaking callers:
//! `{primary_mood, confidence, emotions, emotion_groups}`.

use serde::{Deserialize, Serialize};

use crate::aggregate::{Aggregation, CategoryAggregate};
use crate::catalog::{self, Category};
use crate::config::EngineConfig;
use crate::detect::DetectorScores;
use crate::overrides;
use crate::signal::{self, RawSignal};

/// The ranked category breakdown after overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionGroups {
    pub primary_category: Category,
    pub categories: Vec<CategoryAggregate>,
}

/// The engine's sole output. Stateless: returned to the caller, never stored
/// by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    pub primary_mood: Category,
    /// Raw max signal score x100. Decoupled from the primary category on
    /// purpose; see `signal::confidence`.
    pub confidence: f64,
    pub emotions: Vec<String>,
    pub emotion_groups: EmotionGroups,
}

/// Assemble the final result. Applies the override pass, then flattens
/// everything into the wire shape.
pub(crate) fn assemble(
    signals: &[RawSignal],
    mut aggregation: Aggregation,
    scores: &DetectorScores,
    config: &EngineConfig,
) -> MoodResult {
    // Classifier-derived tags first, in signal encounter order.
    let mut emotions: Vec<String> = signals
        .iter()
        .filter(|s| s.score > config.tag_threshold)
        .map(|s| format!("{} {}", catalog::map(&s.label).name(), catalog::glyph(&s.label)))
        .collect();

    // Override tags are appended after, in detector evaluation order.
    overrides::apply(scores, config, &mut aggregation, &mut emotions);

    MoodResult {
        primary_mood: aggregation.primary,
        confidence: signal::confidence(signals),
        emotions,
        emotion_groups: EmotionGroups {
            primary_category: aggregation.primary,
            categories: aggregation.categories,
        },
    }
}
