//! Pipeline orchestration: load, embed, rank, assemble, generate

use tokio::time::timeout;

use dqa_core::{Answer, Embedder, Error, Generator, Result};

use crate::config::PipelineConfig;
use crate::context::{self, PromptTemplate};
use crate::loader::IndexLoader;
use crate::ranker;

/// The public entry point of the retrieval-and-grounding pipeline
///
/// One instance serves many concurrent queries; the only shared state is the
/// read-only index cache inside the loader. The capabilities are generic so a
/// caller can substitute stubs in tests or wrap the real clients in retry
/// decorators without touching the pipeline.
pub struct RAGPipeline<E, G> {
    loader: IndexLoader,
    embedder: E,
    generator: G,
    template: PromptTemplate,
    config: PipelineConfig,
}

impl<E: Embedder, G: Generator> RAGPipeline<E, G> {
    pub fn new(embedder: E, generator: G, config: PipelineConfig) -> Self {
        let loader = IndexLoader::new(&config.index_path);
        let template = PromptTemplate::new(config.synthesize_examples);
        Self {
            loader,
            embedder,
            generator,
            template,
            config,
        }
    }

    /// Answer one question, converting every failure into a uniform result
    ///
    /// No error escapes this boundary; the presentation layer always gets an
    /// `Answer` it can render as a chat message.
    pub async fn answer(&self, question: &str) -> Answer {
        match self.run(question).await {
            Ok(text) => Answer::ok(text),
            Err(e) => {
                tracing::warn!(error = %e, "query failed");
                Answer::err(user_message(&e))
            }
        }
    }

    /// Linear short-circuit stage chain; the `?` operator guarantees that
    /// embedding is never attempted without an index and generation is never
    /// attempted without an embedding.
    async fn run(&self, question: &str) -> Result<String> {
        let index = self.loader.load().await?;

        let embedding = timeout(self.config.call_timeout, self.embedder.embed(question))
            .await
            .map_err(|_| Error::EmbeddingService("request timed out".to_string()))??;

        let matches = ranker::rank(&embedding.values, &index, self.config.top_k)?;
        if let Some(best) = matches.first() {
            tracing::debug!(top_score = best.score, passages = matches.len(), "context selected");
        }

        let context = context::assemble(&matches);
        let prompt = self.template.render(&context, question);

        let answer = timeout(self.config.call_timeout, self.generator.generate(&prompt))
            .await
            .map_err(|_| Error::GenerationService("request timed out".to_string()))??;

        Ok(answer)
    }
}

/// Map an internal error to the message shown in the chat surface
fn user_message(err: &Error) -> String {
    match err {
        Error::IndexUnavailable(_) => {
            "System error: the knowledge base is missing or empty. \
             Rebuild the index and try again."
                .to_string()
        }
        Error::DimensionMismatch { expected, actual } => format!(
            "System error: the question embedding is {actual}-dimensional but the \
             knowledge base is {expected}-dimensional. The embedding model and the \
             index are out of sync."
        ),
        Error::EmbeddingService(_) => {
            "The embedding service could not process the question. Please try again."
                .to_string()
        }
        Error::GenerationService(_) => {
            "The generation service could not produce an answer. Please try again."
                .to_string()
        }
        Error::Configuration(_) => format!("System error: {err}"),
    }
}
