//! Property tests for the rule overlay invariants

use bugtriage_rules::{RuleOverlay, CRITICAL_INDICATORS, SECURITY_INDICATORS};
use bugtriage_core::{Category, Label, LabelScore, RawClassification, ScoreMap, Urgency};
use proptest::prelude::*;

fn raw_classification(
    category: Category,
    urgency: Urgency,
    category_confidence: f32,
    urgency_confidence: f32,
) -> RawClassification {
    let mut category_scores = ScoreMap::new();
    for &label in Category::ALL {
        category_scores.insert(label, category_confidence);
    }
    let mut urgency_scores = ScoreMap::new();
    for &label in Urgency::ALL {
        urgency_scores.insert(label, urgency_confidence);
    }

    RawClassification {
        category: LabelScore {
            label: category,
            confidence: category_confidence,
            scores: category_scores,
        },
        urgency: LabelScore {
            label: urgency,
            confidence: urgency_confidence,
            scores: urgency_scores,
        },
    }
}

fn any_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL)
}

fn any_urgency() -> impl Strategy<Value = Urgency> {
    prop::sample::select(Urgency::ALL)
}

proptest! {
    /// Confidences stay within [0, 1] for any raw input, including raw
    /// cosine scores below zero and keyword counts above one.
    #[test]
    fn prop_confidences_stay_in_unit_interval(
        category in any_category(),
        urgency in any_urgency(),
        category_confidence in -1.5f32..50.0,
        urgency_confidence in -1.5f32..50.0,
        text in ".{0,160}",
    ) {
        let overlay = RuleOverlay::new().unwrap();
        let result = overlay.apply(
            raw_classification(category, urgency, category_confidence, urgency_confidence),
            &text,
        );

        prop_assert!((0.0..=1.0).contains(&result.category_confidence));
        prop_assert!((0.0..=1.0).contains(&result.urgency_confidence));
    }

    /// Any text carrying a security indicator never resolves to Low or
    /// Medium urgency.
    #[test]
    fn prop_security_indicator_floors_urgency(
        category in any_category(),
        urgency in any_urgency(),
        confidence in 0.0f32..1.0,
        prefix in "[a-z ]{0,40}",
        suffix in "[a-z ]{0,40}",
        indicator in prop::sample::select(SECURITY_INDICATORS),
    ) {
        let overlay = RuleOverlay::new().unwrap();
        let text = format!("{prefix}{indicator}{suffix}");
        let result = overlay.apply(
            raw_classification(category, urgency, confidence, confidence),
            &text,
        );

        prop_assert!(
            matches!(result.urgency, Urgency::High | Urgency::Critical),
            "security text resolved to {:?}",
            result.urgency,
        );
    }

    /// Any text carrying a critical indicator resolves to Critical,
    /// whatever the starting urgency.
    #[test]
    fn prop_critical_indicator_forces_critical(
        category in any_category(),
        urgency in any_urgency(),
        confidence in 0.0f32..1.0,
        prefix in "[a-z ]{0,40}",
        suffix in "[a-z ]{0,40}",
        indicator in prop::sample::select(CRITICAL_INDICATORS),
    ) {
        let overlay = RuleOverlay::new().unwrap();
        let text = format!("{prefix}{indicator}{suffix}");
        let result = overlay.apply(
            raw_classification(category, urgency, confidence, confidence),
            &text,
        );

        prop_assert_eq!(result.urgency, Urgency::Critical);
    }

    /// The overlay never changes the category.
    #[test]
    fn prop_category_is_preserved(
        category in any_category(),
        urgency in any_urgency(),
        text in ".{0,160}",
    ) {
        let overlay = RuleOverlay::new().unwrap();
        let result = overlay.apply(
            raw_classification(category, urgency, 0.5, 0.5),
            &text,
        );

        prop_assert_eq!(result.category, category);
    }
}
