//! Escalation rule definitions and the default rule set

use crate::action::Action;
use crate::trigger::{IndicatorSet, Trigger};
use bugtriage_core::{Category, Result, Urgency};

/// Tokens that mark a report as security-relevant.
pub const SECURITY_INDICATORS: &[&str] = &[
    "security",
    "vulnerability",
    "breach",
    "exploit",
    "xss",
    "injection",
    "hack",
    "attack",
];

/// Tokens that mark a report as a critical system failure.
pub const CRITICAL_INDICATORS: &[&str] = &[
    "crash",
    "down",
    "not working",
    "broken",
    "data loss",
    "production",
    "outage",
    "emergency",
];

/// Tokens that mark an authentication issue as wide-impact.
pub const AUTH_IMPACT_INDICATORS: &[&str] =
    &["all users", "everyone", "cannot login", "blocked"];

/// A single correction rule: a trigger plus the action taken when it
/// fires.
#[derive(Debug)]
pub struct EscalationRule {
    pub name: &'static str,
    pub description: &'static str,
    pub trigger: Trigger,
    pub action: Action,
}

/// The fixed rule set, in application order. Later rules read the state
/// left by earlier ones and may override it; the ordering is part of the
/// classification contract.
pub fn default_rules() -> Result<Vec<EscalationRule>> {
    Ok(vec![
        EscalationRule {
            name: "security-escalation",
            description: "Security-related reports are never low priority",
            trigger: Trigger::Indicators(IndicatorSet::new(SECURITY_INDICATORS)?),
            action: Action::Escalate {
                to: Urgency::High,
                boost: 0.2,
            },
        },
        EscalationRule {
            name: "critical-failure",
            description: "Outage-class failures force the top urgency",
            trigger: Trigger::Indicators(IndicatorSet::new(CRITICAL_INDICATORS)?),
            action: Action::Force {
                to: Urgency::Critical,
                boost: 0.3,
            },
        },
        EscalationRule {
            name: "performance-floor",
            description: "Performance issues are at least medium priority",
            trigger: Trigger::CategoryUrgency {
                category: Category::Performance,
                urgency: Urgency::Low,
            },
            action: Action::Escalate {
                to: Urgency::Medium,
                boost: 0.1,
            },
        },
        EscalationRule {
            name: "auth-blast-radius",
            description: "Authentication issues affecting many users are high priority",
            trigger: Trigger::CategoryWithIndicators {
                category: Category::Authentication,
                indicators: IndicatorSet::new(AUTH_IMPACT_INDICATORS)?,
            },
            action: Action::Escalate {
                to: Urgency::High,
                boost: 0.2,
            },
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_order() {
        let rules = default_rules().unwrap();
        let names: Vec<_> = rules.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "security-escalation",
                "critical-failure",
                "performance-floor",
                "auth-blast-radius",
            ]
        );
    }

    #[test]
    fn test_critical_rule_is_unconditional_force() {
        let rules = default_rules().unwrap();
        let critical = &rules[1];
        assert!(matches!(
            critical.action,
            Action::Force {
                to: Urgency::Critical,
                ..
            }
        ));
    }
}
