//! Rule action definitions

use bugtriage_core::Urgency;

/// Correction applied to the urgency classification when a rule fires.
///
/// Confidence boosts saturate at 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Raise urgency to the target only when the current level is less
    /// severe; the boost applies only when the level actually changes.
    Escalate { to: Urgency, boost: f32 },

    /// Set urgency to the target unconditionally; the boost applies even
    /// when the level is already at the target.
    Force { to: Urgency, boost: f32 },
}

impl Action {
    /// The urgency level this action steers toward.
    pub fn target(&self) -> Urgency {
        match self {
            Self::Escalate { to, .. } | Self::Force { to, .. } => *to,
        }
    }
}
