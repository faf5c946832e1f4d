pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::score::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/text", post(handlers::handle_analyze_text))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::errors::AppError;
    use crate::score::extract::ResumeAnalyzer;
    use crate::score::models::AnalysisInput;

    /// Returns a fixed extraction, or fails like an unreachable upstream.
    struct StubAnalyzer {
        output: Option<AnalysisInput>,
    }

    #[async_trait]
    impl ResumeAnalyzer for StubAnalyzer {
        async fn extract(&self, _resume_text: &str) -> Result<AnalysisInput, AppError> {
            self.output
                .clone()
                .ok_or_else(|| AppError::Analysis("upstream unavailable".to_string()))
        }
    }

    fn test_app(output: Option<AnalysisInput>) -> Router {
        let config = Config {
            anthropic_api_key: "test-key".to_string(),
            llm_model: "test-model".to_string(),
            llm_timeout_secs: 1,
            max_resume_chars: 64,
            port: 0,
            rust_log: "info".to_string(),
        };
        build_router(AppState {
            config,
            analyzer: Arc::new(StubAnalyzer { output }),
        })
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app(None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_end_to_end() {
        let body = json!({
            "hasContactInfo": true,
            "hasWorkExperience": false,
            "hasEducation": true,
            "hasSkills": true,
            "formatIssues": ["Font too small"],
            "skills": ["Python"],
            "strengths": ["Strong leadership"]
        });
        let (status, value) = post_json(test_app(None), "/api/v1/analyze", &body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value,
            json!({
                "score": 80,
                "keywords": ["Python"],
                "suggestions": [
                    {"text": "Include detailed work experience with measurable achievements", "severity": "error"},
                    {"text": "Font too small", "severity": "warning"},
                    {"text": "Strong leadership", "severity": "success"}
                ],
                "format": {"isValid": false, "issues": ["Font too small"]}
            })
        );
    }

    #[tokio::test]
    async fn test_analyze_empty_body_is_no_input() {
        let (status, value) = post_json(test_app(None), "/api/v1/analyze", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "NO_INPUT");
    }

    #[tokio::test]
    async fn test_analyze_malformed_body_is_validation_error() {
        let (status, value) =
            post_json(test_app(None), "/api/v1/analyze", r#"{"hasSkills": true}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_text_scores_extracted_input() {
        let extracted = AnalysisInput {
            has_contact_info: true,
            has_work_experience: true,
            has_education: true,
            has_skills: true,
            skills: vec!["Rust".to_string()],
            action_verbs: vec!["Shipped".to_string()],
            ..Default::default()
        };
        let (status, value) = post_json(
            test_app(Some(extracted)),
            "/api/v1/analyze/text",
            r#"{"text": "Jane Doe, Rust engineer"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["score"], 100);
        assert_eq!(value["keywords"], json!(["Rust", "Shipped"]));
        assert_eq!(value["format"]["isValid"], true);
    }

    #[tokio::test]
    async fn test_analyze_text_missing_text_is_no_input() {
        let (status, value) = post_json(test_app(None), "/api/v1/analyze/text", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "NO_INPUT");

        let (status, value) =
            post_json(test_app(None), "/api/v1/analyze/text", r#"{"text": "   "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "NO_INPUT");
    }

    #[tokio::test]
    async fn test_analyze_text_too_long_is_validation_error() {
        let text = "x".repeat(65);
        let body = json!({ "text": text }).to_string();
        let (status, value) = post_json(test_app(None), "/api/v1/analyze/text", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_text_upstream_failure_is_distinct() {
        let (status, value) =
            post_json(test_app(None), "/api/v1/analyze/text", r#"{"text": "Jane Doe"}"#).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(value["error"]["code"], "ANALYSIS_FAILED");
    }
}
