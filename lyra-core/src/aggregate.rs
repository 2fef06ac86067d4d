// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Lyra-Proprietary
// See LICENSE in the repository root for full license terms.

//! Category aggregation — folds raw classifier signals into ranked
//! per-category aggregates.
//!
//! Accumulation applies the fixed Motivated boost, normalization divides each
//! category's running total by its member count, and categories at or below
//! the minimum confidence are dropped. Sorting is stable, so equal scores
//! keep encounter order.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category};
use crate::config::EngineConfig;
use crate::signal::{round2, RawSignal};

/// One fine-grained emotion inside a category aggregate. `score` is the
/// accumulated signal score x100, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub emotion: String,
    pub emoji: String,
    pub score: f64,
}

/// A ranked category with its normalized score and member emotions.
/// `score` is always the normalized, boosted value, never a raw sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    #[serde(rename = "name")]
    pub category: Category,
    pub score: f64,
    #[serde(rename = "emotions")]
    pub members: Vec<EmotionEntry>,
}

/// Output of the aggregation pass: ranked surviving categories plus the
/// chosen primary (pre-override).
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub primary: Category,
    pub categories: Vec<CategoryAggregate>,
}

/// Aggregate raw signals into ranked categories.
pub fn aggregate(signals: &[RawSignal], config: &EngineConfig) -> Aggregation {
    let mut totals = [0.0_f64; Category::ALL.len()];
    let mut members: [Vec<EmotionEntry>; Category::ALL.len()] =
        std::array::from_fn(|_| Vec::new());

    for signal in signals {
        let category = catalog::map(&signal.label);
        let mut score = signal.score;
        if category == Category::Motivated {
            score *= config.motivated_boost;
        }
        totals[category.index()] += score;
        members[category.index()].push(EmotionEntry {
            emotion: signal.label.clone(),
            emoji: catalog::glyph(&signal.label).to_string(),
            score: round2(score * 100.0),
        });
    }

    let mut categories = Vec::new();
    for (category, category_members) in Category::ALL.into_iter().zip(members) {
        if category_members.is_empty() {
            // Never normalized; zero-member categories keep score 0.
            continue;
        }
        let normalized = totals[category.index()] / category_members.len() as f64;
        if normalized <= config.min_category_score {
            continue;
        }
        categories.push(CategoryAggregate {
            category,
            score: normalized,
            members: category_members,
        });
    }

    for aggregate in &mut categories {
        aggregate
            .members
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    }
    categories.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let primary = categories
        .first()
        .map(|c| c.category)
        .unwrap_or(Category::Neutral);

    Aggregation { primary, categories }
}
