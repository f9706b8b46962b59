//! Gemini configuration

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use dqa_core::{Error, Result};

/// Configuration for the Gemini API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_url: String,
    pub embedding_model: String,
    pub chat_model: String,
    #[serde(skip, default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

impl GeminiConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            Error::Configuration("GEMINI_API_KEY environment variable not found".to_string())
        })?;

        let api_url = env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());

        let embedding_model = env::var("GEMINI_EMBEDDING_MODEL")
            .unwrap_or_else(|_| "gemini-embedding-001".to_string());

        let chat_model =
            env::var("GEMINI_CHAT_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        Ok(Self {
            api_key,
            api_url,
            embedding_model,
            chat_model,
            timeout: default_timeout(),
        })
    }

    /// Create configuration with an explicit key and the default endpoint
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            embedding_model: "gemini-embedding-001".to_string(),
            chat_model: "gemini-2.5-flash".to_string(),
            timeout: default_timeout(),
        }
    }
}
