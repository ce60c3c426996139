//! Rule trigger definitions

use aho_corasick::AhoCorasick;
use bugtriage_core::{Category, Error, Result, Urgency};

/// A set of literal indicator phrases, matched case-insensitively
/// anywhere in the report text.
#[derive(Debug)]
pub struct IndicatorSet {
    matcher: AhoCorasick,
    phrases: &'static [&'static str],
}

impl IndicatorSet {
    pub fn new(phrases: &'static [&'static str]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(phrases)
            .map_err(|e| Error::internal(format!("failed to build indicator matcher: {e}")))?;

        Ok(Self { matcher, phrases })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    pub fn phrases(&self) -> &'static [&'static str] {
        self.phrases
    }
}

/// Trigger condition for an escalation rule
#[derive(Debug)]
pub enum Trigger {
    /// Any indicator phrase appears in the text
    Indicators(IndicatorSet),

    /// Category matches and any indicator phrase appears in the text
    CategoryWithIndicators {
        category: Category,
        indicators: IndicatorSet,
    },

    /// Category and current urgency both match
    CategoryUrgency {
        category: Category,
        urgency: Urgency,
    },
}

impl Trigger {
    /// Evaluate against the report text and the current intermediate
    /// classification state.
    pub fn matches(&self, text: &str, category: Category, urgency: Urgency) -> bool {
        match self {
            Self::Indicators(indicators) => indicators.matches(text),
            Self::CategoryWithIndicators {
                category: wanted,
                indicators,
            } => category == *wanted && indicators.matches(text),
            Self::CategoryUrgency {
                category: wanted,
                urgency: level,
            } => category == *wanted && urgency == *level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_match_is_case_insensitive() {
        let set = IndicatorSet::new(&["breach", "data loss"]).unwrap();
        assert!(set.matches("Possible DATA LOSS detected"));
        assert!(!set.matches("everything is fine"));
    }

    #[test]
    fn test_indicator_matches_inside_words() {
        // Indicators are literal substrings, so "downstream" still
        // triggers "down". This mirrors the scoring contract.
        let set = IndicatorSet::new(&["down"]).unwrap();
        assert!(set.matches("downstream consumer broke"));
    }

    #[test]
    fn test_category_guard() {
        let trigger = Trigger::CategoryWithIndicators {
            category: Category::Authentication,
            indicators: IndicatorSet::new(&["all users"]).unwrap(),
        };

        assert!(trigger.matches("all users locked out", Category::Authentication, Urgency::Low));
        assert!(!trigger.matches("all users locked out", Category::Backend, Urgency::Low));
        assert!(!trigger.matches("one user locked out", Category::Authentication, Urgency::Low));
    }

    #[test]
    fn test_category_urgency_guard() {
        let trigger = Trigger::CategoryUrgency {
            category: Category::Performance,
            urgency: Urgency::Low,
        };

        assert!(trigger.matches("slow page", Category::Performance, Urgency::Low));
        assert!(!trigger.matches("slow page", Category::Performance, Urgency::Medium));
        assert!(!trigger.matches("slow page", Category::Backend, Urgency::Low));
    }
}
