//! Pipeline configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use dqa_core::{Error, Result};

/// Configuration for the RAG pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Location of the serialized index, relative to the working directory
    pub index_path: PathBuf,
    /// Number of passages selected for the grounding context
    pub top_k: usize,
    /// Timeout applied to each external call (embed, generate) individually
    pub call_timeout: Duration,
    /// Whether the prompt instructs the model to synthesize a code example
    /// when the context describes behavior without showing one
    pub synthesize_examples: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from("database.json"),
            top_k: 5,
            call_timeout: Duration::from_secs(60),
            synthesize_examples: true,
        }
    }
}

impl PipelineConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var("DQA_INDEX_PATH") {
            config.index_path = PathBuf::from(path);
        }

        if let Ok(raw) = env::var("DQA_TOP_K") {
            config.top_k = parse_top_k(&raw)?;
        }

        if let Ok(raw) = env::var("DQA_CALL_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                Error::Configuration(format!(
                    "DQA_CALL_TIMEOUT_SECS must be a number of seconds, got {raw:?}"
                ))
            })?;
            config.call_timeout = Duration::from_secs(secs);
        }

        if let Ok(raw) = env::var("DQA_SYNTHESIZE_EXAMPLES") {
            config.synthesize_examples = parse_flag(&raw);
        }

        Ok(config)
    }
}

/// A zero `top_k` would select no passages and send a groundless prompt, so
/// it is rejected along with anything non-numeric
fn parse_top_k(raw: &str) -> Result<usize> {
    match raw.parse() {
        Ok(k) if k > 0 => Ok(k),
        _ => Err(Error::Configuration(format!(
            "DQA_TOP_K must be a positive integer, got {raw:?}"
        ))),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.index_path, PathBuf::from("database.json"));
        assert_eq!(config.top_k, 5);
        assert_eq!(config.call_timeout, Duration::from_secs(60));
        assert!(config.synthesize_examples);
    }

    #[test]
    fn test_top_k_rejects_zero_and_garbage() {
        assert!(matches!(parse_top_k("0"), Err(Error::Configuration(_))));
        assert!(matches!(parse_top_k("-1"), Err(Error::Configuration(_))));
        assert!(matches!(parse_top_k("five"), Err(Error::Configuration(_))));
        assert_eq!(parse_top_k("3").unwrap(), 3);
    }

    #[test]
    fn test_flag_parsing_ignores_case() {
        assert!(parse_flag("true"));
        assert!(parse_flag("True"));
        assert!(parse_flag("YES"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }
}
