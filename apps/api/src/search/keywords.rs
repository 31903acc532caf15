//! Keyword extraction: turns raw JD text into a keyword list plus a synonym map.
//!
//! Two strategies sit behind `KeywordExtractionStrategy`:
//! - `ModelBackedExtractor`: asks the model for strict JSON (used when an API key is configured).
//! - `HeuristicExtractor`: regex tokenizer + stop words + skill vocabulary. Deterministic.
//!
//! `KeywordExtractor` composes them. Any failure of the model path is logged and
//! answered with the heuristic result, so callers always get an `ExtractionResult`.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::LlmConfig;
use crate::llm_client::{LlmClient, LlmError};
use crate::search::prompts::keyword_extraction_prompt;

pub type SynonymMap = BTreeMap<String, Vec<String>>;

/// Keywords in first-seen order (case preserved, no case-insensitive duplicates)
/// and aliases keyed by keyword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub synonyms: SynonymMap,
}

impl ExtractionResult {
    /// Trims keywords, drops blanks, and removes case-insensitive duplicates.
    fn normalized(self) -> Self {
        let mut seen = HashSet::new();
        let keywords = self
            .keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && seen.insert(k.to_lowercase()))
            .collect();

        Self {
            keywords,
            synonyms: self.synonyms,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("model reply contains no JSON object")]
    NoJsonObject,

    #[error("model reply is not valid extraction JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy trait
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait KeywordExtractionStrategy: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    async fn extract(&self, jd_text: &str) -> Result<ExtractionResult, ExtractionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// ModelBackedExtractor
// ────────────────────────────────────────────────────────────────────────────

pub struct ModelBackedExtractor {
    llm: LlmClient,
}

impl ModelBackedExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl KeywordExtractionStrategy for ModelBackedExtractor {
    fn name(&self) -> &'static str {
        "model"
    }

    async fn extract(&self, jd_text: &str) -> Result<ExtractionResult, ExtractionError> {
        let prompt = keyword_extraction_prompt(jd_text);
        let raw = self.llm.complete(&prompt).await?;
        parse_model_reply(&raw)
    }
}

/// Parses the span from the first `{` to the last `}` of a model reply.
/// Prose or code fences around the object are ignored; anything else is an error.
pub fn parse_model_reply(raw: &str) -> Result<ExtractionResult, ExtractionError> {
    let start = raw.find('{').ok_or(ExtractionError::NoJsonObject)?;
    let end = raw.rfind('}').ok_or(ExtractionError::NoJsonObject)?;
    if end < start {
        return Err(ExtractionError::NoJsonObject);
    }

    let parsed: ExtractionResult = serde_json::from_str(&raw[start..=end])?;
    Ok(parsed.normalized())
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicExtractor
// ────────────────────────────────────────────────────────────────────────────

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9+#.\-]{2,}").expect("token pattern is valid"));

const STOP_WORDS: &[&str] = &[
    "with", "and", "in", "for", "the", "years", "yrs", "experience", "exp", "job", "role",
    "skills", "skill", "based", "at", "location", "prefer",
];

const COMMON_SKILLS: &[&str] = &[
    "java", "python", "spring", "django", "flask", "microservices", "aws", "docker",
    "kubernetes", "react", "node", "sql", "nosql", "j2ee", "springboot", "spring-boot",
];

/// Deterministic, offline extractor. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExtractor;

#[async_trait]
impl KeywordExtractionStrategy for HeuristicExtractor {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn extract(&self, jd_text: &str) -> Result<ExtractionResult, ExtractionError> {
        Ok(heuristic_extract(jd_text))
    }
}

impl HeuristicExtractor {
    pub fn extract_keywords(&self, jd_text: &str) -> ExtractionResult {
        heuristic_extract(jd_text)
    }
}

/// Keeps a token when it is capitalized, a known skill, or longer than 3 characters.
pub fn heuristic_extract(jd_text: &str) -> ExtractionResult {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for m in TOKEN_RE.find_iter(jd_text) {
        // sentence punctuation: "Bangalore." → "Bangalore"
        let token = m.as_str().trim_end_matches('.');
        if token.chars().count() < 2 {
            continue;
        }

        let lower = token.to_lowercase();
        if STOP_WORDS.contains(&lower.as_str()) {
            continue;
        }

        let retained = token.chars().next().is_some_and(char::is_uppercase)
            || COMMON_SKILLS.contains(&lower.as_str())
            || lower.chars().count() > 3;

        if retained && seen.insert(lower) {
            keywords.push(token.to_string());
        }
    }

    let mut synonyms = SynonymMap::new();
    for keyword in &keywords {
        let alias = match keyword.to_lowercase().as_str() {
            "spring" => "spring boot",
            "java" => "j2ee",
            _ => continue,
        };
        synonyms
            .entry(keyword.clone())
            .or_default()
            .push(alias.to_string());
    }

    ExtractionResult { keywords, synonyms }
}

// ────────────────────────────────────────────────────────────────────────────
// Selector
// ────────────────────────────────────────────────────────────────────────────

/// Tries the primary strategy (if any) and falls back to the heuristic on any error.
#[derive(Clone)]
pub struct KeywordExtractor {
    primary: Option<Arc<dyn KeywordExtractionStrategy>>,
    fallback: HeuristicExtractor,
}

impl KeywordExtractor {
    pub fn heuristic_only() -> Self {
        Self {
            primary: None,
            fallback: HeuristicExtractor,
        }
    }

    pub fn with_primary(primary: Arc<dyn KeywordExtractionStrategy>) -> Self {
        Self {
            primary: Some(primary),
            fallback: HeuristicExtractor,
        }
    }

    /// Model-backed when credentials are present, heuristic-only otherwise.
    pub fn from_config(llm: Option<&LlmConfig>) -> Result<Self, LlmError> {
        match llm {
            Some(config) => {
                let client = LlmClient::new(config)?;
                info!("Model-backed keyword extraction enabled (model: {})", client.model());
                Ok(Self::with_primary(Arc::new(ModelBackedExtractor::new(client))))
            }
            None => Ok(Self::heuristic_only()),
        }
    }

    /// Name of the strategy tried first.
    pub fn primary_name(&self) -> &'static str {
        self.primary.as_ref().map_or("heuristic", |p| p.name())
    }

    pub async fn extract(&self, jd_text: &str) -> ExtractionResult {
        match &self.primary {
            Some(primary) => match primary.extract(jd_text).await {
                Ok(result) => {
                    debug!(
                        "{} extraction returned {} keywords",
                        primary.name(),
                        result.keywords.len()
                    );
                    return result;
                }
                Err(e) => {
                    warn!(
                        "{} extraction failed, using heuristic fallback: {e}",
                        primary.name()
                    );
                }
            },
            None => debug!("No model configured, using heuristic extractor"),
        }

        self.fallback.extract_keywords(jd_text)
    }
}
