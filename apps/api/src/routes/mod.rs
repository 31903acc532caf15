pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::search::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Search API
        .route("/api/v1/search/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/search/keywords",
            post(handlers::handle_extract_keywords),
        )
        .route("/api/v1/search/boolean", post(handlers::handle_build_query))
        .route("/api/v1/candidates", get(handlers::handle_list_candidates))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::models::candidate::sample_pool;
    use crate::search::keywords::KeywordExtractor;
    use crate::search::pipeline::Pipeline;

    const SAMPLE_JD: &str = "Hiring Java Developer with 3-5 yrs experience in Bangalore. \
        Skills: Java, Spring Boot, Microservices, Docker";

    fn test_router() -> Router {
        let pipeline = Pipeline::new(KeywordExtractor::heuristic_only(), sample_pool(), 6)
            .with_ranking_seed(Some(7));
        build_router(AppState {
            pipeline: Arc::new(pipeline),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let (status, body) = send(get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "hiring-search");
    }

    #[tokio::test]
    async fn test_generate_returns_full_result() {
        let (status, body) = send(post_json(
            "/api/v1/search/generate",
            json!({
                "job_description": SAMPLE_JD,
                "role": "Java Developer",
                "experience": "3-5",
                "location": "Bangalore"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keywords"][0], "Hiring");
        assert_eq!(body["synonyms"]["Java"], json!(["j2ee"]));
        let boolean = body["boolean_query"].as_str().unwrap();
        assert!(boolean.ends_with("AND (\"3-5 years\" OR \"3-5 yrs\" OR 3-5)"));
        for site in ["Naukri", "LinkedIn", "Google"] {
            assert!(body["xray_queries"][site].as_str().unwrap().contains(boolean));
        }

        let candidates = body["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), 5);
        let scores: Vec<u64> = candidates
            .iter()
            .map(|c| c["match"].as_u64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert!(candidates[0]["exp"].is_u64());
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_description() {
        let (status, body) = send(post_json(
            "/api/v1/search/generate",
            json!({ "job_description": "   \n" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_treats_blank_optionals_as_absent() {
        let (status, body) = send(post_json(
            "/api/v1/search/generate",
            json!({ "job_description": "Rust Tokio Axum", "role": "", "location": " " }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["boolean_query"], "(Rust OR Tokio OR Axum)");
    }

    #[tokio::test]
    async fn test_keywords_endpoint_returns_extraction_only() {
        let (status, body) = send(post_json(
            "/api/v1/search/keywords",
            json!({ "job_description": SAMPLE_JD }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keywords"].as_array().unwrap().len(), 8);
        assert!(body.get("candidates").is_none());
    }

    #[tokio::test]
    async fn test_keywords_endpoint_rejects_blank_description() {
        let (status, _) = send(post_json(
            "/api/v1/search/keywords",
            json!({ "job_description": "" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_boolean_endpoint_builds_from_keywords() {
        let (status, body) = send(post_json(
            "/api/v1/search/boolean",
            json!({ "keywords": ["Java", "Spring Boot"], "location": "Pune" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["boolean_query"], "(Java OR \"Spring Boot\") AND Pune");
        assert_eq!(
            body["xray_queries"]["LinkedIn"],
            "site:linkedin.com/in (Java OR \"Spring Boot\") AND Pune"
        );
    }

    #[tokio::test]
    async fn test_boolean_endpoint_with_no_keywords_is_empty() {
        let (status, body) = send(post_json(
            "/api/v1/search/boolean",
            json!({ "keywords": [], "role": "SRE" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["boolean_query"], "");
        assert_eq!(body["xray_queries"]["Naukri"], "site:naukri.com/resume ");
    }

    #[tokio::test]
    async fn test_candidates_endpoint_lists_pool() {
        let (status, body) = send(get_request("/api/v1/candidates")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0]["name"], "Ankit Sharma");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send(get_request("/api/v1/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
