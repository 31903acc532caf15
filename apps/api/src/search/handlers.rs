//! Axum route handlers for the Search API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::search::keywords::ExtractionResult;
use crate::search::pipeline::{non_blank, JobDescriptionInput, PipelineResult};
use crate::search::query::{build_boolean, build_xray, XRayTemplates};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsRequest {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildQueryRequest {
    pub keywords: Vec<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BuildQueryResponse {
    pub boolean_query: String,
    pub xray_queries: XRayTemplates,
}

fn require_job_description(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/search/generate
///
/// Full pipeline: keywords → Boolean → X-Ray → ranked mock candidates.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionInput>,
) -> Result<Json<PipelineResult>, AppError> {
    require_job_description(&request.text)?;

    let result = state.pipeline.run(&request.normalized()).await;

    Ok(Json(result))
}

/// POST /api/v1/search/keywords
///
/// Extraction only. Useful for previewing keywords before generating queries.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<ExtractKeywordsRequest>,
) -> Result<Json<ExtractionResult>, AppError> {
    require_job_description(&request.job_description)?;

    let extraction = state
        .pipeline
        .extractor()
        .extract(&request.job_description)
        .await;

    Ok(Json(extraction))
}

/// POST /api/v1/search/boolean
///
/// Rebuilds the Boolean and X-Ray strings from an edited keyword list.
pub async fn handle_build_query(Json(request): Json<BuildQueryRequest>) -> Json<BuildQueryResponse> {
    let role = non_blank(request.role);
    let location = non_blank(request.location);
    let experience = non_blank(request.experience);

    let boolean_query = build_boolean(
        &request.keywords,
        role.as_deref(),
        location.as_deref(),
        experience.as_deref(),
    );
    let xray_queries = build_xray(&boolean_query);

    Json(BuildQueryResponse {
        boolean_query,
        xray_queries,
    })
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<Vec<CandidateRecord>> {
    Json(state.pipeline.pool().to_vec())
}
