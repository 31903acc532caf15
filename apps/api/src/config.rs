use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CANDIDATE_LIMIT: usize = 6;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Credentials and endpoint for the keyword-extraction model.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

/// Application configuration loaded from environment variables.
///
/// Built once at startup and handed to the pipeline; nothing downstream reads
/// the environment. `llm` is `None` when no API key is configured, which is a
/// normal state that selects the heuristic extractor.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: Option<LlmConfig>,
    pub candidate_limit: usize,
    pub ranking_seed: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let llm = match get("GROQ_API_KEY") {
            Some(api_key) => Some(LlmConfig {
                api_key,
                model: get("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_url: get("GROQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                timeout_secs: parse_or(get("LLM_TIMEOUT_SECS"), DEFAULT_LLM_TIMEOUT_SECS)
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            }),
            None => None,
        };

        Ok(Config {
            llm,
            candidate_limit: parse_or(get("CANDIDATE_LIMIT"), DEFAULT_CANDIDATE_LIMIT)
                .context("CANDIDATE_LIMIT must be a non-negative integer")?,
            ranking_seed: get("RANKING_SEED")
                .map(|v| v.trim().parse::<u64>())
                .transpose()
                .context("RANKING_SEED must be an unsigned 64-bit integer")?,
            port: parse_or(get("PORT"), DEFAULT_PORT).context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => Ok(v.trim().parse::<T>()?),
        None => Ok(default),
    }
}
