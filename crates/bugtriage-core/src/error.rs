//! Error types for Bugtriage

/// Result type alias using Bugtriage's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Bugtriage operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid report input (empty title/description); surfaced as a 400
    #[error("{0}")]
    Validation(String),

    /// Batch container outside the accepted bounds; surfaced as a 400
    #[error("batch size must be between 1 and {max} bugs (got {got})", max = crate::MAX_BATCH_SIZE)]
    InvalidBatchSize {
        /// Number of reports in the rejected batch
        got: usize,
    },

    /// Reference embeddings could not be built; the semantic strategy is
    /// unavailable for the process lifetime
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// A per-call embedding failure; recovered by strategy fallback
    #[error("embedding error: {0}")]
    Embedding(String),

    /// Embedding call exceeded its deadline; treated like an embedding failure
    #[error("operation timed out")]
    Timeout,

    /// Unexpected failure inside the classification pipeline
    #[error("processing error: {0}")]
    Processing(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new model-unavailable error
    pub fn model_unavailable(msg: impl Into<String>) -> Self {
        Self::ModelUnavailable(msg.into())
    }

    /// Create a new embedding error
    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::Embedding(msg.into())
    }

    /// Create a new processing error
    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True for errors the caller should surface as a bad request
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidBatchSize { .. })
    }
}
