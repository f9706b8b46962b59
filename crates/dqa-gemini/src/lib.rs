//! Gemini API client for DQA
//!
//! Implements both external capabilities the pipeline depends on — the
//! embedding service and the text-generation service — against the Gemini
//! REST API.

mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;

// Re-export the capability traits the client implements
pub use dqa_core::{Embedder, Generator};
