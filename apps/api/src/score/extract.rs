//! Resume Analyzer: trait seam that turns plain resume text into an `AnalysisInput`.
//!
//! Default backend: `LlmResumeAnalyzer` (structured extraction via the LLM client).
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>` so handlers never name a backend.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::score::models::AnalysisInput;
use crate::score::prompts::{build_extract_prompt, RESUME_EXTRACT_SYSTEM};

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// Blank text is `NoInputSubmitted`; every upstream failure is `Analysis`.
    async fn extract(&self, resume_text: &str) -> Result<AnalysisInput, AppError>;
}

pub struct LlmResumeAnalyzer {
    llm: LlmClient,
}

impl LlmResumeAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for LlmResumeAnalyzer {
    async fn extract(&self, resume_text: &str) -> Result<AnalysisInput, AppError> {
        let text = resume_text.trim();
        if text.is_empty() {
            return Err(AppError::NoInputSubmitted);
        }

        debug!(chars = text.chars().count(), "requesting structured extraction");
        let input: AnalysisInput = self
            .llm
            .call_json(&build_extract_prompt(text), RESUME_EXTRACT_SYSTEM)
            .await
            .map_err(|e| AppError::Analysis(format!("Structured extraction failed: {e}")))?;

        info!(model = self.llm.model(), "resume text extracted");
        Ok(input)
    }
}

/// Trims a submission and enforces the configured size limit.
/// Called by handlers before any analyzer sees the text.
pub fn check_resume_text(resume_text: &str, max_chars: usize) -> Result<&str, AppError> {
    let text = resume_text.trim();
    if text.is_empty() {
        return Err(AppError::NoInputSubmitted);
    }
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AppError::Validation(format!(
            "Resume text is {chars} characters; the limit is {max_chars}"
        )));
    }
    Ok(text)
}
