//! Bugtriage Core
//!
//! Core types shared across Bugtriage components.
//!
//! This crate provides:
//! - The closed `Category` and `Urgency` label sets
//! - Bug report input with validation
//! - Classification result and batch result types
//! - Error types and result handling

pub mod error;
pub mod label;
pub mod report;
pub mod types;

pub use error::{Error, Result};
pub use label::{Category, Label, Urgency};
pub use report::BugReport;
pub use types::{
    BatchItemResult, BatchSummary, ClassificationResult, LabelScore, RawClassification, ScoreMap,
};

/// Upper bound on batch sizes accepted by the orchestrator.
pub const MAX_BATCH_SIZE: usize = 20;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::label::{Category, Label, Urgency};
    pub use crate::report::BugReport;
    pub use crate::types::{
        BatchItemResult, BatchSummary, ClassificationResult, LabelScore, RawClassification,
        ScoreMap,
    };
}
