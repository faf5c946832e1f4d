use axum::{body::Bytes, extract::State, Json};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::info;

use crate::errors::AppError;
use crate::score::engine::analyze;
use crate::score::extract::check_resume_text;
use crate::score::models::{AnalysisInput, AnalysisResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(body: Bytes) -> Result<Json<AnalysisResult>, AppError> {
    let input: AnalysisInput = parse_submission(&body)?;
    Ok(Json(score_input(&input)))
}

/// POST /api/v1/analyze/text
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, AppError> {
    let req: AnalyzeTextRequest = parse_submission(&body)?;
    let raw = req.text.ok_or(AppError::NoInputSubmitted)?;
    let text = check_resume_text(&raw, state.config.max_resume_chars)?;
    let input = state.analyzer.extract(text).await?;
    Ok(Json(score_input(&input)))
}

fn score_input(input: &AnalysisInput) -> AnalysisResult {
    let result = analyze(input);
    info!(
        score = result.score,
        keywords = result.keywords.len(),
        suggestions = result.suggestions.len(),
        "resume analyzed"
    );
    result
}

/// An empty body means nothing was submitted; a non-empty body that does not
/// parse is a validation error.
fn parse_submission<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::NoInputSubmitted);
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Malformed analysis request: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_no_input() {
        let result = parse_submission::<AnalysisInput>(b"");
        assert!(matches!(result, Err(AppError::NoInputSubmitted)));
        let result = parse_submission::<AnalysisInput>(b" \n");
        assert!(matches!(result, Err(AppError::NoInputSubmitted)));
    }

    #[test]
    fn test_malformed_body_is_validation() {
        let result = parse_submission::<AnalysisInput>(b"{\"hasSkills\": ");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_text_request_without_text_field() {
        let req: AnalyzeTextRequest = parse_submission(b"{}").unwrap();
        assert!(req.text.is_none());
    }
}
