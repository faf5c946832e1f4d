use serde::{Deserialize, Deserializer, Serialize};

/// Structured attributes extracted from a resume by an upstream collaborator.
/// Field names are camelCase on the wire and must stay that way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub has_contact_info: bool,
    pub has_work_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub format_issues: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub industry_terms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action_verbs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    pub severity: Severity,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormatValidation {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

/// Everything derived from one `AnalysisInput`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub score: u32, // 0 – 100
    pub keywords: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub format: FormatValidation,
}

/// Language-model output sometimes carries `null` where a list is expected.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
