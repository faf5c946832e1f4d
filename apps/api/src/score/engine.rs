//! Score Engine: deterministic ATS compatibility scoring.
//!
//! Every function here is pure: same `AnalysisInput` in, same output out.
//! `analyze` composes the four derivations; none depends on another.

use std::collections::HashSet;

use crate::score::models::{AnalysisInput, AnalysisResult, FormatValidation, Severity, Suggestion};

const BASE_SCORE: i64 = 100;
const PENALTY_NO_CONTACT: i64 = 10;
const PENALTY_NO_EXPERIENCE: i64 = 15;
const PENALTY_NO_EDUCATION: i64 = 10;
const PENALTY_NO_SKILLS: i64 = 10;
const PENALTY_PER_FORMAT_ISSUE: i64 = 5;

pub const SUGGEST_CONTACT: &str =
    "Add complete contact information including phone, email, and location";
pub const SUGGEST_EXPERIENCE: &str =
    "Include detailed work experience with measurable achievements";
pub const SUGGEST_EDUCATION: &str = "Add your educational background";
pub const SUGGEST_SKILLS: &str = "List relevant technical and soft skills";

/// Runs all four derivations over one input.
pub fn analyze(input: &AnalysisInput) -> AnalysisResult {
    AnalysisResult {
        score: compute_score(input),
        keywords: extract_keywords(input),
        suggestions: generate_suggestions(input),
        format: validate_format(input),
    }
}

/// Starts at 100, subtracts a fixed penalty per missing section and 5 per
/// format issue, clamped to 0..=100.
pub fn compute_score(input: &AnalysisInput) -> u32 {
    let mut score = BASE_SCORE;

    if !input.has_contact_info {
        score -= PENALTY_NO_CONTACT;
    }
    if !input.has_work_experience {
        score -= PENALTY_NO_EXPERIENCE;
    }
    if !input.has_education {
        score -= PENALTY_NO_EDUCATION;
    }
    if !input.has_skills {
        score -= PENALTY_NO_SKILLS;
    }

    let issue_count = i64::try_from(input.format_issues.len()).unwrap_or(i64::MAX);
    score = score.saturating_sub(issue_count.saturating_mul(PENALTY_PER_FORMAT_ISSUE));

    score.clamp(0, 100) as u32
}

/// Union of skills, industry terms and action verbs, in that order.
/// Exact string equality; the first occurrence wins.
pub fn extract_keywords(input: &AnalysisInput) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    input
        .skills
        .iter()
        .chain(&input.industry_terms)
        .chain(&input.action_verbs)
        .filter(|kw| seen.insert(kw.as_str()))
        .cloned()
        .collect()
}

/// Missing-section errors first (contact, experience, education, skills),
/// then one warning per format issue, then one success per strength.
pub fn generate_suggestions(input: &AnalysisInput) -> Vec<Suggestion> {
    let missing_sections = [
        (input.has_contact_info, SUGGEST_CONTACT),
        (input.has_work_experience, SUGGEST_EXPERIENCE),
        (input.has_education, SUGGEST_EDUCATION),
        (input.has_skills, SUGGEST_SKILLS),
    ];

    let mut suggestions: Vec<Suggestion> = missing_sections
        .iter()
        .filter(|(present, _)| !present)
        .map(|(_, text)| Suggestion::new(*text, Severity::Error))
        .collect();

    suggestions.extend(
        input
            .format_issues
            .iter()
            .map(|issue| Suggestion::new(issue.as_str(), Severity::Warning)),
    );
    suggestions.extend(
        input
            .strengths
            .iter()
            .map(|strength| Suggestion::new(strength.as_str(), Severity::Success)),
    );

    suggestions
}

pub fn validate_format(input: &AnalysisInput) -> FormatValidation {
    FormatValidation {
        is_valid: input.format_issues.is_empty(),
        issues: input.format_issues.clone(),
    }
}
