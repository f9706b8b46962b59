//! Gemini API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use dqa_core::{Embedder, Embedding, Error, Generator, Result};

use crate::config::GeminiConfig;

/// Gemini API client implementing both pipeline capabilities
///
/// The client never retries; transient failures surface as service errors so
/// the caller can decide on a retry policy.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct EmbedRequest {
    content: Content,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a new Gemini client from configuration
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Create a new Gemini client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// POST a JSON body and return the raw response text, folding transport
    /// and HTTP-status failures into one description
    async fn post(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> std::result::Result<String, String> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| format!("failed to read response: {e}"))?;

        if !status.is_success() {
            return Err(format!("status {status}: {text}"));
        }

        Ok(text)
    }
}

#[async_trait]
impl Embedder for GeminiClient {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let url = format!(
            "{}/models/{}:embedContent",
            self.config.api_url, self.config.embedding_model
        );
        let body = EmbedRequest {
            content: Content {
                parts: vec![TextPart {
                    text: text.to_string(),
                }],
            },
        };

        tracing::debug!(model = %self.config.embedding_model, "embedding query");
        let raw = self.post(&url, &body).await.map_err(Error::EmbeddingService)?;

        let parsed: EmbedResponse = serde_json::from_str(&raw)
            .map_err(|e| Error::EmbeddingService(format!("malformed response: {e}")))?;

        if parsed.embedding.values.is_empty() {
            return Err(Error::EmbeddingService(
                "response contained an empty embedding".to_string(),
            ));
        }

        Ok(Embedding {
            values: parsed.embedding.values,
        })
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_url, self.config.chat_model
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.config.chat_model, "generating answer");
        let raw = self
            .post(&url, &body)
            .await
            .map_err(Error::GenerationService)?;

        let parsed: GenerateResponse = serde_json::from_str(&raw)
            .map_err(|e| Error::GenerationService(format!("malformed response: {e}")))?;

        let answer = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if answer.trim().is_empty() {
            return Err(Error::GenerationService(
                "response contained no candidate text".to_string(),
            ));
        }

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_embed_request_shape() {
        let body = EmbedRequest {
            content: Content {
                parts: vec![TextPart {
                    text: "hello".to_string(),
                }],
            },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"content": {"parts": [{"text": "hello"}]}}));
    }

    #[test]
    fn test_generate_request_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: "prompt".to_string(),
                }],
            }],
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"contents": [{"parts": [{"text": "prompt"}]}]})
        );
    }

    #[test]
    fn test_embed_response_parsing() {
        let raw = r#"{"embedding": {"values": [0.1, 0.2, 0.3]}}"#;
        let parsed: EmbedResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.embedding.values, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_generate_response_parsing() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "part one "}, {"text": "part two"}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();

        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "part one part two");
    }

    #[test]
    fn test_generate_response_without_candidates() {
        let raw = r#"{}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
