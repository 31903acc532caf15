#![allow(dead_code)]

//! Pipeline orchestrator: one full extract → boolean → x-ray → rank pass per request.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::llm_client::LlmError;
use crate::models::candidate::{sample_pool, CandidateRecord, ScoredCandidate};
use crate::search::keywords::{ExtractionResult, KeywordExtractor, SynonymMap};
use crate::search::query::{build_boolean, build_xray, XRayTemplates};
use crate::search::ranking::rank;

/// Inbound request. `job_description` must be non-blank; the HTTP boundary enforces it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobDescriptionInput {
    #[serde(rename = "job_description")]
    pub text: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl JobDescriptionInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Blank optional fields become `None`, matching an unfilled form field.
    pub fn normalized(self) -> Self {
        Self {
            text: self.text,
            role: non_blank(self.role),
            experience: non_blank(self.experience),
            location: non_blank(self.location),
        }
    }
}

pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Sole output contract of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    pub keywords: Vec<String>,
    pub synonyms: SynonymMap,
    pub boolean_query: String,
    pub xray_queries: XRayTemplates,
    /// Sorted by `match` descending.
    pub candidates: Vec<ScoredCandidate>,
}

pub struct Pipeline {
    extractor: KeywordExtractor,
    pool: Vec<CandidateRecord>,
    candidate_limit: usize,
    ranking_seed: Option<u64>,
}

impl Pipeline {
    pub fn new(extractor: KeywordExtractor, pool: Vec<CandidateRecord>, candidate_limit: usize) -> Self {
        Self {
            extractor,
            pool,
            candidate_limit,
            ranking_seed: None,
        }
    }

    /// Rank every run with `StdRng::seed_from_u64(seed)` instead of the thread RNG.
    pub fn with_ranking_seed(mut self, seed: Option<u64>) -> Self {
        self.ranking_seed = seed;
        self
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let extractor = KeywordExtractor::from_config(config.llm.as_ref())?;
        Ok(Self::new(extractor, sample_pool(), config.candidate_limit)
            .with_ranking_seed(config.ranking_seed))
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn pool(&self) -> &[CandidateRecord] {
        &self.pool
    }

    /// Runs the full pipeline. Behavior for blank `input.text` is unspecified.
    pub async fn run(&self, input: &JobDescriptionInput) -> PipelineResult {
        let extraction = self.extractor.extract(&input.text).await;

        match self.ranking_seed {
            Some(seed) => self.assemble(input, extraction, &mut StdRng::seed_from_u64(seed)),
            None => self.assemble(input, extraction, &mut rand::rng()),
        }
    }

    /// Everything after extraction. Synchronous; randomness comes only from `rng`.
    pub fn assemble<R: Rng>(
        &self,
        input: &JobDescriptionInput,
        extraction: ExtractionResult,
        rng: &mut R,
    ) -> PipelineResult {
        let ExtractionResult { keywords, synonyms } = extraction;

        let boolean_query = build_boolean(
            &keywords,
            input.role.as_deref(),
            input.location.as_deref(),
            input.experience.as_deref(),
        );
        let xray_queries = build_xray(&boolean_query);

        // experience feeds the query only, not the ranking
        let candidates = rank(
            &self.pool,
            self.candidate_limit,
            &keywords,
            input.location.as_deref(),
            rng,
        );

        info!(
            "Pipeline finished: {} keywords, {} candidates, top match {}",
            keywords.len(),
            candidates.len(),
            candidates.first().map_or(0, |c| c.match_score)
        );

        PipelineResult {
            keywords,
            synonyms,
            boolean_query,
            xray_queries,
            candidates,
        }
    }
}
