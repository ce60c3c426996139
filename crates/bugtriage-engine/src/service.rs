//! Triage service: strategy selection and the single-report pipeline
//!
//! The service is built once during process startup and shared read-only
//! for the process lifetime; per-request state is limited to the report
//! and its result.

use bugtriage_classifiers::{
    Classifier, Embedder, KeywordClassifier, SimilarityClassifier, Strategy,
};
use bugtriage_core::{
    BugReport, Category, ClassificationResult, Error, Label, RawClassification, Result, Urgency,
};
use bugtriage_rules::RuleOverlay;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Strategy metadata exposed by the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyStatus {
    pub ai_available: bool,
    pub strategy: Strategy,
    pub embedding_model: Option<String>,
    pub status: String,
    pub categories: Vec<&'static str>,
    pub urgency_levels: Vec<&'static str>,
}

/// The triage pipeline: one selected scoring strategy, a keyword
/// fallback, and the rule overlay.
pub struct TriageService {
    primary: Option<Arc<SimilarityClassifier>>,
    fallback: Arc<KeywordClassifier>,
    overlay: RuleOverlay,
}

impl TriageService {
    /// Build the service, choosing the scoring strategy once.
    ///
    /// With a provider configured, the semantic strategy is attempted
    /// first; reference-set construction failure downgrades the whole
    /// process to the keyword strategy rather than failing startup.
    pub async fn new(embedder: Option<Arc<dyn Embedder>>) -> Result<Self> {
        let overlay = RuleOverlay::new()?;
        let fallback = Arc::new(KeywordClassifier::new());

        let primary = match embedder {
            Some(embedder) => match SimilarityClassifier::build(embedder).await {
                Ok(classifier) => {
                    info!(
                        model = classifier.embedding_model(),
                        "semantic-similarity strategy active"
                    );
                    Some(Arc::new(classifier))
                }
                Err(err) => {
                    warn!(error = %err, "semantic strategy unavailable, using keyword fallback");
                    None
                }
            },
            None => {
                info!("no embedding provider configured; keyword strategy active");
                None
            }
        };

        Ok(Self {
            primary,
            fallback,
            overlay,
        })
    }

    /// Whether the semantic strategy is active.
    pub fn ai_available(&self) -> bool {
        self.primary.is_some()
    }

    /// The strategy selected at startup.
    pub fn strategy(&self) -> Strategy {
        match &self.primary {
            Some(classifier) => classifier.strategy(),
            None => self.fallback.strategy(),
        }
    }

    /// Strategy metadata for the status endpoint.
    pub fn status(&self) -> StrategyStatus {
        let (status, embedding_model) = match &self.primary {
            Some(classifier) => (
                "semantic similarity references loaded and ready".to_string(),
                Some(classifier.embedding_model().to_string()),
            ),
            None => ("using keyword frequency fallback".to_string(), None),
        };

        StrategyStatus {
            ai_available: self.ai_available(),
            strategy: self.strategy(),
            embedding_model,
            status,
            categories: Category::ALL.iter().map(|l| l.as_str()).collect(),
            urgency_levels: Urgency::ALL.iter().map(|l| l.as_str()).collect(),
        }
    }

    /// Classify a single report: validate, score, apply the overlay.
    pub async fn triage(&self, report: &BugReport) -> Result<ClassificationResult> {
        report.validate()?;
        let text = report.combined_text();

        metrics::counter!("bugtriage_requests_total").increment(1);

        let raw = self.classify_raw(&text).await?;
        let result = self.overlay.apply(raw, &text);

        info!(
            category = %result.category,
            urgency = %result.urgency,
            "triage complete"
        );
        Ok(result)
    }

    /// Score with the selected strategy, downgrading to keywords for this
    /// call when the provider fails or times out. Embedding failures are
    /// never surfaced to the caller; the keyword strategy is infallible.
    async fn classify_raw(&self, text: &str) -> Result<RawClassification> {
        if let Some(primary) = &self.primary {
            match primary.classify(text).await {
                Ok(raw) => return Ok(raw),
                Err(err @ (Error::Embedding(_) | Error::Timeout)) => {
                    metrics::counter!("bugtriage_strategy_fallbacks_total").increment(1);
                    warn!(error = %err, "embedding failed; downgrading to keyword strategy");
                }
                Err(err) => return Err(err),
            }
        }

        self.fallback.classify(text).await
    }
}
