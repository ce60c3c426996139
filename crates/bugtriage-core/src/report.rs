//! Incoming bug report payload and validation

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A free-text bug report as submitted by a reporter.
///
/// Both fields must be non-empty after trimming. Fields default to the
/// empty string on deserialization so that a missing field surfaces as a
/// field-specific validation error instead of a generic decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BugReport {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}

impl BugReport {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Check that both fields are non-empty after trimming.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("bug title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(Error::validation("bug description is required"));
        }
        Ok(())
    }

    /// The text the engine classifies: trimmed title and description
    /// joined by a single space.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title.trim(), self.description.trim())
    }
}
