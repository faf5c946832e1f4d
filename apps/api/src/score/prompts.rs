// Prompt templates for turning resume text into an `AnalysisInput`.

pub const RESUME_EXTRACT_SYSTEM: &str = "\
You are an Applicant Tracking System (ATS) resume auditor. \
You read plain resume text and report which sections are present and which ATS problems it has. \
You MUST respond with valid JSON only. No markdown fences, no explanations. \
Never invent skills or strengths that are not supported by the text.";

pub const RESUME_EXTRACT_PROMPT: &str = r#"Audit the following resume text for ATS compatibility.

RESUME TEXT:
{resume_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "hasContactInfo": boolean,      // phone, email AND location all present
  "hasWorkExperience": boolean,   // at least one dated role
  "hasEducation": boolean,
  "hasSkills": boolean,           // an explicit skills section or list
  "formatIssues": ["string"],     // e.g. "Tables detected", "Header text in image", "Font too small"
  "skills": ["string"],           // technical and soft skills as written
  "industryTerms": ["string"],    // domain vocabulary (e.g. "SaaS", "HIPAA", "CI/CD")
  "actionVerbs": ["string"],      // verbs opening bullet points (e.g. "Led", "Built")
  "strengths": ["string"]         // one short sentence each, things the resume does well
}

RULES:
1. Booleans must be true or false, never null.
2. Use [] for any list with nothing to report.
3. Copy skills, terms and verbs exactly as they appear; do not normalize case.
4. Each formatIssues entry must be a short, actionable sentence.
5. Return ONLY the JSON object."#;

pub fn build_extract_prompt(resume_text: &str) -> String {
    RESUME_EXTRACT_PROMPT.replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = build_extract_prompt("Jane Doe\nSenior Engineer at Acme");
        assert!(prompt.contains("Senior Engineer at Acme"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_prompt_names_every_input_field() {
        for field in [
            "hasContactInfo",
            "hasWorkExperience",
            "hasEducation",
            "hasSkills",
            "formatIssues",
            "skills",
            "industryTerms",
            "actionVerbs",
            "strengths",
        ] {
            assert!(RESUME_EXTRACT_PROMPT.contains(field), "missing {field}");
        }
    }
}
