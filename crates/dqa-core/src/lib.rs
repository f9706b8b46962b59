//! Core traits and types for DQA (Document Question Answering)
//!
//! This crate defines the fundamental traits and types used across the DQA system.
//! It provides the data model for the precomputed vector index, capability-facing
//! interfaces for the embedding and text-generation services, and the uniform
//! answer shape returned to callers, making the pipeline test-friendly and
//! extensible.

pub mod error;
pub mod index;
pub mod llm;
pub mod types;

pub use error::{Error, Result};
pub use index::{ScoredMatch, VectorIndex, VectorRecord};
pub use llm::{Embedder, Embedding, Generator};
pub use types::Answer;
