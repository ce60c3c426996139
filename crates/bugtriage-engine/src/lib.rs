//! Bugtriage Engine
//!
//! Orchestrates the full triage pipeline: strategy selection at startup,
//! per-call downgrade from semantic similarity to keyword frequency on
//! embedding failure, rule-overlay correction, and batch processing with
//! per-item failure isolation.

pub mod batch;
pub mod service;

pub use service::{StrategyStatus, TriageService};
