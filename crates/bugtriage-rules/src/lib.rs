//! Bugtriage Rules
//!
//! Deterministic rule overlay applied after either scoring strategy.
//! Rules are literal-text triggers paired with urgency corrections,
//! evaluated in a fixed order; the overlay is a pure transformation and
//! owns result finalization (confidence clamping and rounding).

pub mod action;
pub mod engine;
pub mod rule;
pub mod trigger;

pub use action::Action;
pub use engine::RuleOverlay;
pub use rule::{
    default_rules, EscalationRule, AUTH_IMPACT_INDICATORS, CRITICAL_INDICATORS,
    SECURITY_INDICATORS,
};
pub use trigger::{IndicatorSet, Trigger};
