// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Lyra-Proprietary
// See LICENSE in the repository root for full license terms.

//! Override resolution — lexicon detector scores against fixed thresholds.
//!
//! Rules run in a fixed sequence: calm, motivation, heartbreak, love. Each
//! rule that clears its threshold unconditionally overwrites the primary
//! category, so when several trip in one call the last one wins. The order
//! is an evaluation-order artifact of the reference behavior, not a priority
//! ranking; it is preserved as a compatibility contract. Do not replace with
//! a max-score-wins scheme.

use crate::aggregate::{Aggregation, CategoryAggregate, EmotionEntry};
use crate::catalog::Category;
use crate::config::EngineConfig;
use crate::detect::DetectorScores;
use crate::signal::round2;

/// Apply the override rules to an aggregation, mutating the primary, the
/// category list (synthetic entries are appended, never re-sorted), and the
/// flat tag list.
pub(crate) fn apply(
    scores: &DetectorScores,
    config: &EngineConfig,
    aggregation: &mut Aggregation,
    tags: &mut Vec<String>,
) {
    let rules = [
        ("calm", scores.calm, config.calm_threshold, Category::Calm),
        (
            "motivation",
            scores.motivation,
            config.motivation_threshold,
            Category::Motivated,
        ),
        (
            "heartbreak",
            scores.heartbreak,
            config.heartbreak_threshold,
            Category::Heartbroken,
        ),
        ("love", scores.love, config.love_threshold, Category::Loving),
    ];

    for (label, score, threshold, category) in rules {
        if score <= threshold {
            continue;
        }

        aggregation.primary = category;

        let already_present = aggregation
            .categories
            .iter()
            .any(|c| c.category == category);
        if !already_present {
            aggregation.categories.push(CategoryAggregate {
                category,
                score,
                members: vec![EmotionEntry {
                    emotion: label.to_string(),
                    emoji: category.glyph().to_string(),
                    score: round2(score * 100.0),
                }],
            });
        }

        tags.push(format!("{label} {}", category.glyph()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_aggregation() -> Aggregation {
        Aggregation {
            primary: Category::Neutral,
            categories: Vec::new(),
        }
    }

    fn no_scores() -> DetectorScores {
        DetectorScores {
            motivation: 0.0,
            love: 0.0,
            heartbreak: 0.0,
            calm: 0.0,
        }
    }

    #[test]
    fn test_no_scores_no_overrides() {
        let mut agg = empty_aggregation();
        let mut tags = Vec::new();
        apply(&no_scores(), &EngineConfig::default(), &mut agg, &mut tags);
        assert_eq!(agg.primary, Category::Neutral);
        assert!(agg.categories.is_empty());
        assert!(tags.is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut agg = empty_aggregation();
        let mut tags = Vec::new();
        let scores = DetectorScores {
            calm: 0.20, // exactly at threshold: no override
            ..no_scores()
        };
        apply(&scores, &EngineConfig::default(), &mut agg, &mut tags);
        assert_eq!(agg.primary, Category::Neutral);

        let scores = DetectorScores {
            calm: 0.21,
            ..no_scores()
        };
        apply(&scores, &EngineConfig::default(), &mut agg, &mut tags);
        assert_eq!(agg.primary, Category::Calm);
    }

    #[test]
    fn test_synthetic_entry_injected() {
        let mut agg = empty_aggregation();
        let mut tags = Vec::new();
        let scores = DetectorScores {
            heartbreak: 0.9,
            ..no_scores()
        };
        apply(&scores, &EngineConfig::default(), &mut agg, &mut tags);

        assert_eq!(agg.primary, Category::Heartbroken);
        assert_eq!(agg.categories.len(), 1);
        let synthetic = &agg.categories[0];
        assert_eq!(synthetic.category, Category::Heartbroken);
        assert_eq!(synthetic.members.len(), 1);
        assert_eq!(synthetic.members[0].emotion, "heartbreak");
        assert!((synthetic.members[0].score - 90.0).abs() < 1e-9);
        assert_eq!(tags, vec![format!("heartbreak {}", Category::Heartbroken.glyph())]);
    }

    #[test]
    fn test_no_injection_when_category_present() {
        let mut agg = Aggregation {
            primary: Category::Calm,
            categories: vec![CategoryAggregate {
                category: Category::Calm,
                score: 0.5,
                members: vec![EmotionEntry {
                    emotion: "serenity".into(),
                    emoji: "😌".into(),
                    score: 50.0,
                }],
            }],
        };
        let mut tags = Vec::new();
        let scores = DetectorScores {
            calm: 0.9,
            ..no_scores()
        };
        apply(&scores, &EngineConfig::default(), &mut agg, &mut tags);

        // Primary set, tag appended, but no duplicate category entry.
        assert_eq!(agg.primary, Category::Calm);
        assert_eq!(agg.categories.len(), 1);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_last_applied_wins() {
        let mut agg = empty_aggregation();
        let mut tags = Vec::new();
        let scores = DetectorScores {
            motivation: 0.9,
            love: 0.8,
            ..no_scores()
        };
        apply(&scores, &EngineConfig::default(), &mut agg, &mut tags);

        // Love is evaluated after motivation and overwrites its override.
        assert_eq!(agg.primary, Category::Loving);
        assert_eq!(agg.categories.len(), 2);
        assert_eq!(agg.categories[0].category, Category::Motivated);
        assert_eq!(agg.categories[1].category, Category::Loving);
        // Tags appear in evaluation order.
        assert!(tags[0].starts_with("motivation"));
        assert!(tags[1].starts_with("love"));
    }

    #[test]
    fn test_all_four_trigger_in_order() {
        let mut agg = empty_aggregation();
        let mut tags = Vec::new();
        let scores = DetectorScores {
            motivation: 0.5,
            love: 0.5,
            heartbreak: 0.5,
            calm: 0.5,
        };
        apply(&scores, &EngineConfig::default(), &mut agg, &mut tags);

        assert_eq!(agg.primary, Category::Loving);
        let order: Vec<Category> = agg.categories.iter().map(|c| c.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Calm,
                Category::Motivated,
                Category::Heartbroken,
                Category::Loving
            ]
        );
        assert_eq!(tags.len(), 4);
    }
}
