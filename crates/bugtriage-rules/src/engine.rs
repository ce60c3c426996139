//! Rule overlay: the pure transformation from a raw classification to
//! the final result.

use crate::action::Action;
use crate::rule::{default_rules, EscalationRule};
use bugtriage_core::{ClassificationResult, RawClassification, Result};
use tracing::debug;

/// Applies the escalation rules, in order, to a raw classifier output.
///
/// Each rule reads the current intermediate state and produces the next;
/// the input is never mutated in place by callers. The overlay finishes
/// by clamping confidences to [0, 1] and rounding every numeric field to
/// three decimal places.
#[derive(Debug)]
pub struct RuleOverlay {
    rules: Vec<EscalationRule>,
}

impl RuleOverlay {
    /// Create an overlay with the fixed default rule set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: default_rules()?,
        })
    }

    /// Create an overlay with a custom rule sequence (tests).
    pub fn with_rules(rules: Vec<EscalationRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[EscalationRule] {
        &self.rules
    }

    /// Run every rule over the raw output and finalize the result.
    pub fn apply(&self, raw: RawClassification, text: &str) -> ClassificationResult {
        let RawClassification {
            category,
            mut urgency,
        } = raw;

        for rule in &self.rules {
            if !rule.trigger.matches(text, category.label, urgency.label) {
                continue;
            }

            match rule.action {
                Action::Escalate { to, boost } => {
                    if urgency.label.severity() < to.severity() {
                        debug!(rule = rule.name, from = %urgency.label, to = %to, "urgency escalated");
                        urgency.label = to;
                        urgency.confidence = (urgency.confidence + boost).min(1.0);
                    }
                }
                Action::Force { to, boost } => {
                    debug!(rule = rule.name, from = %urgency.label, to = %to, "urgency forced");
                    urgency.label = to;
                    urgency.confidence = (urgency.confidence + boost).min(1.0);
                }
            }
        }

        ClassificationResult {
            category: category.label,
            urgency: urgency.label,
            category_confidence: round3(category.confidence.clamp(0.0, 1.0)),
            urgency_confidence: round3(urgency.confidence.clamp(0.0, 1.0)),
            category_scores: category.scores.map_scores(round3),
            urgency_scores: urgency.scores.map_scores(round3),
        }
    }
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugtriage_core::{Category, Label, LabelScore, ScoreMap, Urgency};

    fn raw(category: Category, urgency: Urgency, confidence: f32) -> RawClassification {
        let mut category_scores = ScoreMap::new();
        for &label in Category::ALL {
            category_scores.insert(label, if label == category { confidence } else { 0.1 });
        }
        let mut urgency_scores = ScoreMap::new();
        for &label in Urgency::ALL {
            urgency_scores.insert(label, if label == urgency { confidence } else { 0.1 });
        }

        RawClassification {
            category: LabelScore {
                label: category,
                confidence,
                scores: category_scores,
            },
            urgency: LabelScore {
                label: urgency,
                confidence,
                scores: urgency_scores,
            },
        }
    }

    #[test]
    fn test_security_indicator_escalates_low_and_medium() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(
            raw(Category::Backend, Urgency::Low, 0.5),
            "possible XSS vulnerability in comments",
        );
        assert_eq!(result.urgency, Urgency::High);
        assert!((result.urgency_confidence - 0.7).abs() < 1e-6);

        let result = overlay.apply(
            raw(Category::Backend, Urgency::Medium, 0.5),
            "sql injection in search",
        );
        assert_eq!(result.urgency, Urgency::High);
    }

    #[test]
    fn test_security_indicator_leaves_high_untouched() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(
            raw(Category::Security, Urgency::High, 0.6),
            "security hole reported",
        );
        assert_eq!(result.urgency, Urgency::High);
        // No change, no boost.
        assert!((result.urgency_confidence - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_critical_indicator_forces_critical() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(
            raw(Category::Backend, Urgency::Low, 0.4),
            "production is down for all regions",
        );
        assert_eq!(result.urgency, Urgency::Critical);
        assert!((result.urgency_confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_critical_is_idempotent_but_still_boosts() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(
            raw(Category::Backend, Urgency::Critical, 0.5),
            "system crash on boot",
        );
        assert_eq!(result.urgency, Urgency::Critical);
        assert!((result.urgency_confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_critical_overrides_security_escalation() {
        let overlay = RuleOverlay::new().unwrap();

        // Security escalates Low to High and adds 0.2; the critical rule
        // then forces Critical and adds 0.3.
        let result = overlay.apply(
            raw(Category::Security, Urgency::Low, 0.3),
            "exploit caused a production outage",
        );
        assert_eq!(result.urgency, Urgency::Critical);
        assert!((result.urgency_confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_performance_floor() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(
            raw(Category::Performance, Urgency::Low, 0.5),
            "page feels sluggish on large accounts",
        );
        assert_eq!(result.urgency, Urgency::Medium);
        assert!((result.urgency_confidence - 0.6).abs() < 1e-6);

        // Only Low is floored; Medium stays.
        let result = overlay.apply(
            raw(Category::Performance, Urgency::Medium, 0.5),
            "page feels sluggish on large accounts",
        );
        assert_eq!(result.urgency, Urgency::Medium);
        assert!((result.urgency_confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_auth_blast_radius_requires_category() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(
            raw(Category::Authentication, Urgency::Medium, 0.5),
            "cannot login since the last deploy",
        );
        assert_eq!(result.urgency, Urgency::High);
        assert!((result.urgency_confidence - 0.7).abs() < 1e-6);

        // Same text under a different category does not fire.
        let result = overlay.apply(
            raw(Category::Ui, Urgency::Medium, 0.5),
            "cannot login since the last deploy",
        );
        assert_eq!(result.urgency, Urgency::Medium);
    }

    #[test]
    fn test_confidence_saturates_at_one() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(
            raw(Category::Backend, Urgency::Low, 0.95),
            "security breach and production down",
        );
        assert_eq!(result.urgency, Urgency::Critical);
        assert_eq!(result.urgency_confidence, 1.0);
    }

    #[test]
    fn test_negative_similarity_confidence_clamps_to_zero() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(raw(Category::Ui, Urgency::Low, -0.2), "nothing notable");
        assert_eq!(result.category_confidence, 0.0);
        assert_eq!(result.urgency_confidence, 0.0);
        // Raw scores keep their sign, only rounded.
        assert_eq!(result.category_scores.get(Category::Ui), Some(-0.2));
    }

    #[test]
    fn test_results_rounded_to_three_decimals() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(
            raw(Category::Backend, Urgency::Medium, 0.123456),
            "nothing notable",
        );
        assert_eq!(result.urgency_confidence, 0.123);
        assert_eq!(result.category_scores.get(Category::Backend), Some(0.123));
    }

    #[test]
    fn test_no_rules_fire_on_neutral_text() {
        let overlay = RuleOverlay::new().unwrap();

        let result = overlay.apply(
            raw(Category::Ui, Urgency::Medium, 0.5),
            "button alignment slightly off on the settings page",
        );
        assert_eq!(result.category, Category::Ui);
        assert_eq!(result.urgency, Urgency::Medium);
        assert!((result.urgency_confidence - 0.5).abs() < 1e-6);
    }
}
