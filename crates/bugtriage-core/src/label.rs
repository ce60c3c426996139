//! Closed label sets for triage classification
//!
//! Both sets are fixed at compile time. `Label::ALL` is the declaration
//! order, which is also the tie-break order for classifier score scans:
//! the first label reaching the maximum score wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common interface over the two closed label sets.
pub trait Label: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Every label in declaration order (the tie-break authority).
    const ALL: &'static [Self];

    /// Canonical display name, as it appears on the wire.
    fn as_str(&self) -> &'static str;
}

/// Functional area a bug belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "UI")]
    Ui,
    Backend,
    Authentication,
    Performance,
    Security,
}

impl Label for Category {
    const ALL: &'static [Self] = &[
        Self::Ui,
        Self::Backend,
        Self::Authentication,
        Self::Performance,
        Self::Security,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ui => "UI",
            Self::Backend => "Backend",
            Self::Authentication => "Authentication",
            Self::Performance => "Performance",
            Self::Security => "Security",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity/priority level of a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Numeric severity, higher is more urgent. Used by escalation rules
    /// to decide whether a target level is actually an escalation.
    pub fn severity(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Critical => 3,
        }
    }
}

impl Label for Urgency {
    const ALL: &'static [Self] = &[Self::Critical, Self::High, Self::Medium, Self::Low];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_declaration_order() {
        assert_eq!(Category::ALL[0], Category::Ui);
        assert_eq!(Category::ALL.len(), 5);
        assert_eq!(Category::ALL[4], Category::Security);
    }

    #[test]
    fn test_urgency_severity_ordering() {
        assert!(Urgency::Critical.severity() > Urgency::High.severity());
        assert!(Urgency::High.severity() > Urgency::Medium.severity());
        assert!(Urgency::Medium.severity() > Urgency::Low.severity());
    }

    #[test]
    fn test_ui_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Category::Ui).unwrap(), "\"UI\"");
        assert_eq!(
            serde_json::to_string(&Urgency::Critical).unwrap(),
            "\"Critical\""
        );
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(Category::Ui.to_string(), "UI");
        assert_eq!(Urgency::Low.to_string(), "Low");
    }
}
