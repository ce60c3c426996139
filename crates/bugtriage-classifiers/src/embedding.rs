//! Embedding provider interface and vector math helpers
//!
//! The provider is opaque to the engine: any implementation that returns
//! a fixed-dimension vector, deterministic for identical input, will do.
//! `HttpEmbedder` talks to an OpenAI-compatible `/embeddings` endpoint.

use async_trait::async_trait;
use bugtriage_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the embedding provider API key.
pub const API_KEY_ENV: &str = "BUGTRIAGE_EMBEDDING_API_KEY";

/// Opaque text-embedding provider.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed the given text into a fixed-dimension vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Name of the underlying embedding model.
    fn model(&self) -> &str;
}

/// HTTP client for an OpenAI-compatible embeddings endpoint.
pub struct HttpEmbedder {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl HttpEmbedder {
    /// Create a client for `{base_url}/embeddings`. The API key, when the
    /// provider requires one, is read from `BUGTRIAGE_EMBEDDING_API_KEY`.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::embedding(format!("failed to build embedding client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: std::env::var(API_KEY_ENV).ok(),
            timeout,
        })
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let payload = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let send = async {
            let mut request = self
                .client
                .post(format!("{}/embeddings", self.base_url))
                .json(&payload);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = request
                .send()
                .await
                .map_err(|e| Error::embedding(format!("embedding request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(Error::embedding(format!(
                    "embedding provider returned {}",
                    response.status()
                )));
            }

            let body: EmbeddingResponse = response
                .json()
                .await
                .map_err(|e| Error::embedding(format!("invalid embedding response: {e}")))?;

            body.data
                .into_iter()
                .next()
                .map(|d| d.embedding)
                .ok_or_else(|| Error::embedding("embedding response contained no vectors"))
        };

        match tokio::time::timeout(self.timeout, send).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout),
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Cosine similarity between two vectors; 0.0 when either norm is zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Element-wise mean of equal-length vectors.
pub(crate) fn mean_vector(vectors: &[Vec<f32>]) -> Result<Vec<f32>> {
    let Some(first) = vectors.first() else {
        return Err(Error::internal("cannot average an empty vector set"));
    };
    let dimension = first.len();

    let mut mean = vec![0.0f32; dimension];
    for vector in vectors {
        if vector.len() != dimension {
            return Err(Error::model_unavailable(format!(
                "embedding dimension mismatch: expected {dimension}, got {}",
                vector.len()
            )));
        }
        for (acc, value) in mean.iter_mut().zip(vector.iter()) {
            *acc += value;
        }
    }

    let count = vectors.len() as f32;
    for value in &mut mean {
        *value /= count;
    }
    Ok(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.3, 0.4, 0.5];
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let sim = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]);
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_norm_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_mean_vector() {
        let mean = mean_vector(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        assert_eq!(mean, vec![0.5, 0.5]);
    }

    #[test]
    fn test_mean_vector_dimension_mismatch() {
        let err = mean_vector(&[vec![1.0, 0.0], vec![0.0]]).unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable(_)));
    }
}
