//! Error types for the DQA system

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the DQA system
///
/// `IndexUnavailable` and `DimensionMismatch` are not retryable without
/// operator intervention (the index must be rebuilt, or the embedding model
/// realigned with the one used at corpus-build time). The two service errors
/// are transient and safe to retry at the caller's discretion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("knowledge base unavailable: {0}")]
    IndexUnavailable(String),

    #[error("embedding dimension mismatch: index is {expected}-dimensional, query is {actual}-dimensional")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding service error: {0}")]
    EmbeddingService(String),

    #[error("generation service error: {0}")]
    GenerationService(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}
