//! Capability traits for the external embedding and generation services

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A query embedding returned by the embedding capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    pub values: Vec<f32>,
}

/// Trait for the embedding capability: text in, fixed-length vector out
///
/// The returned dimensionality must match the index built at corpus time;
/// the pipeline surfaces a mismatch as a first-class error rather than
/// producing a nonsensical score.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding>;
}

/// Trait for the text-generation capability: prompt in, answer text out
///
/// The pipeline treats the returned text as opaque; it may contain markdown.
/// Neither trait retries internally, so a caller can wrap an implementation
/// in a retry/backoff decorator without changing the pipeline.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
