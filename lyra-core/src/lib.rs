// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Lyra-Proprietary
// See LICENSE in the repository root for full license terms.

//! lyra-core — deterministic mood categorization for journal text.
//!
//! Maps raw `(label, score)` pairs from an external emotion classifier onto
//! a closed set of 14 user-facing mood categories, aggregates and normalizes
//! per-category confidence, runs an independent rule-based detection pass
//! (weighted regex lexicons for motivation, love, heartbreak, calm) over the
//! raw text, and resolves detector overrides into a final [`MoodResult`].

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod detect;
pub mod engine;
pub mod error;
pub mod overrides;
pub mod report;
pub mod signal;

pub use aggregate::{CategoryAggregate, EmotionEntry};
pub use catalog::Category;
pub use config::EngineConfig;
pub use detect::DetectorScores;
pub use engine::{categorize, EmotionClassifier, MoodEngine};
pub use error::EngineError;
pub use report::{EmotionGroups, MoodResult};
pub use signal::RawSignal;
