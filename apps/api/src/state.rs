use std::sync::Arc;

use crate::config::Config;
use crate::score::extract::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Turns resume text into an `AnalysisInput`. Default: `LlmResumeAnalyzer`.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
