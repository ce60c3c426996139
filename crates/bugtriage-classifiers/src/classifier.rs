//! Classifier trait and strategy metadata

use async_trait::async_trait;
use bugtriage_core::{RawClassification, Result};
use serde::Serialize;

/// Trait for all classification strategies
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text against both label sets
    async fn classify(&self, text: &str) -> Result<RawClassification>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Get the scoring strategy this classifier implements
    fn strategy(&self) -> Strategy;
}

/// Scoring strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Cosine similarity against mean reference embeddings
    SemanticSimilarity,
    /// Weighted keyword/phrase frequency counts
    KeywordFrequency,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SemanticSimilarity => "semantic-similarity",
            Self::KeywordFrequency => "keyword-frequency",
        }
    }
}
