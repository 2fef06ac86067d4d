//! Configuration for the mood categorization engine.
//!
//! Defaults reproduce the reference behavior exactly; the struct exists so
//! the constants live in one serializable, inspectable place.

use serde::{Deserialize, Serialize};

/// Engine parameters. All scores are on the classifier's [0, 1] scale unless
/// noted otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Categories whose normalized score is <= this are dropped.
    pub min_category_score: f64,
    /// Multiplier applied to Motivated-mapped signal scores before
    /// accumulation. Motivation-adjacent labels are numerous but individually
    /// weak; the boost compensates.
    pub motivated_boost: f64,
    /// Raw signals above this score contribute an emotion tag.
    pub tag_threshold: f64,
    /// Calm detector override threshold.
    pub calm_threshold: f64,
    /// Motivation detector override threshold.
    pub motivation_threshold: f64,
    /// Heartbreak detector override threshold.
    pub heartbreak_threshold: f64,
    /// Love detector override threshold.
    pub love_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_category_score: 0.1,
            motivated_boost: 1.5,
            tag_threshold: 0.1,
            calm_threshold: 0.20,
            motivation_threshold: 0.20,
            heartbreak_threshold: 0.20,
            love_threshold: 0.30,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration, returning any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(0.0..=1.0).contains(&self.min_category_score) {
            issues.push(format!(
                "min_category_score {} out of range [0, 1]",
                self.min_category_score
            ));
        }
        if self.motivated_boost < 1.0 {
            issues.push(format!("motivated_boost {} must be >= 1.0", self.motivated_boost));
        }
        if !(0.0..=1.0).contains(&self.tag_threshold) {
            issues.push(format!("tag_threshold {} out of range [0, 1]", self.tag_threshold));
        }
        for (name, value) in [
            ("calm_threshold", self.calm_threshold),
            ("motivation_threshold", self.motivation_threshold),
            ("heartbreak_threshold", self.heartbreak_threshold),
            ("love_threshold", self.love_threshold),
        ] {
            if value < 0.0 {
                issues.push(format!("{name} {value} must be >= 0"));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_empty());
        assert!((config.motivated_boost - 1.5).abs() < f64::EPSILON);
        assert!((config.love_threshold - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_bad_boost() {
        let config = EngineConfig {
            motivated_boost: 0.5,
            ..EngineConfig::default()
        };
        assert!(!config.validate().is_empty());
    }

    #[test]
    fn test_validate_bad_threshold() {
        let config = EngineConfig {
            heartbreak_threshold: -0.1,
            ..EngineConfig::default()
        };
        assert!(!config.validate().is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: EngineConfig = serde_json::from_str(&json).unwrap();
        assert!((restored.min_category_score - 0.1).abs() < f64::EPSILON);
        assert!((restored.calm_threshold - 0.20).abs() < f64::EPSILON);
    }
}
