//! Retrieval-and-grounding pipeline for DQA
//!
//! This crate implements the query-time half of the system: loading the
//! precomputed vector index, ranking passages against a query embedding,
//! assembling a bounded grounding context, and orchestrating the two external
//! capabilities into a single `answer` call.

mod config;
mod context;
mod loader;
mod pipeline;
mod ranker;


pub use config::PipelineConfig;
pub use context::{PASSAGE_DELIMITER, PromptTemplate, assemble};
pub use loader::IndexLoader;
pub use pipeline::RAGPipeline;
pub use ranker::rank;

// Re-export core types for convenience
pub use dqa_core::{
    Answer, Embedder, Embedding, Error, Generator, Result, ScoredMatch, VectorIndex, VectorRecord,
};
