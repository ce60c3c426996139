//! Semantic-similarity classifier
//!
//! Scores the report embedding against every reference vector with cosine
//! similarity. Embedding failures propagate so the caller can downgrade
//! to the keyword strategy for that call.

use crate::classifier::{Classifier, Strategy};
use crate::embedding::{cosine_similarity, Embedder};
use crate::reference::{category_exemplars, urgency_exemplars, ReferenceSet};
use bugtriage_core::{
    Category, Error, Label, LabelScore, RawClassification, Result, ScoreMap, Urgency,
};
use std::sync::Arc;
use tracing::info;

pub struct SimilarityClassifier {
    name: String,
    embedder: Arc<dyn Embedder>,
    categories: ReferenceSet<Category>,
    urgencies: ReferenceSet<Urgency>,
}

impl std::fmt::Debug for SimilarityClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityClassifier")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl SimilarityClassifier {
    /// Build both reference sets through the given provider.
    ///
    /// Fails with `ModelUnavailable` when any exemplar cannot be embedded;
    /// startup-time failure is fatal to this strategy, not to the service.
    pub async fn build(embedder: Arc<dyn Embedder>) -> Result<Self> {
        let categories = ReferenceSet::build(&category_exemplars(), embedder.as_ref()).await?;
        let urgencies = ReferenceSet::build(&urgency_exemplars(), embedder.as_ref()).await?;

        info!(
            model = embedder.model(),
            dimension = categories.dimension(),
            "reference embeddings ready"
        );

        Ok(Self {
            name: "similarity".to_string(),
            embedder,
            categories,
            urgencies,
        })
    }

    /// Name of the embedding model backing this classifier.
    pub fn embedding_model(&self) -> &str {
        self.embedder.model()
    }

    fn score_against<L: Label>(
        set: &ReferenceSet<L>,
        vector: &[f32],
    ) -> Result<LabelScore<L>> {
        let mut scores = ScoreMap::new();
        for entry in set.entries() {
            scores.insert(entry.label, cosine_similarity(vector, &entry.vector));
        }

        let (label, confidence) = scores
            .best()
            .ok_or_else(|| Error::internal("reference set is empty"))?;

        Ok(LabelScore {
            label,
            confidence,
            scores,
        })
    }
}

#[async_trait::async_trait]
impl Classifier for SimilarityClassifier {
    async fn classify(&self, text: &str) -> Result<RawClassification> {
        let vector = self.embedder.embed(text).await?;

        if vector.len() != self.categories.dimension() {
            return Err(Error::embedding(format!(
                "embedding dimension mismatch: expected {}, got {}",
                self.categories.dimension(),
                vector.len()
            )));
        }

        Ok(RawClassification {
            category: Self::score_against(&self.categories, &vector)?,
            urgency: Self::score_against(&self.urgencies, &vector)?,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn strategy(&self) -> Strategy {
        Strategy::SemanticSimilarity
    }
}
