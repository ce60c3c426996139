//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Embedding provider; `None` pins the keyword strategy for the
    /// process lifetime.
    #[serde(default)]
    pub embedding: Option<EmbeddingConfig>,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, embedding_url: Option<&str>) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(url) = embedding_url {
            match config.embedding.as_mut() {
                Some(embedding) => embedding.base_url = url.to_string(),
                None => {
                    config.embedding = Some(EmbeddingConfig {
                        base_url: url.to_string(),
                        ..Default::default()
                    })
                }
            }
        }

        Ok(config)
    }
}

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Base URL of an OpenAI-compatible embeddings API
    pub base_url: String,

    /// Embedding model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-call deadline in milliseconds; a timeout downgrades the call
    /// to the keyword strategy
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl EmbeddingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8090/v1".to_string(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_model() -> String {
    "all-MiniLM-L6-v2".to_string()
}

fn default_timeout_ms() -> u64 {
    5_000
}
