// Prompt constants for keyword extraction.

/// Keyword extraction prompt template. Replace `{jd_text}` before sending.
pub const KEYWORD_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract a short list of primary skills, role titles, synonyms, and related tags from this job description.
Output ONLY a strict JSON object with exactly these keys:
- "keywords": an array of strings
- "synonyms": an object mapping a keyword to an array of alias strings
Do NOT include any text outside the JSON object.

JOB DESCRIPTION:
{jd_text}

Example output:
{"keywords": ["Java", "Spring Boot", "Microservices"], "synonyms": {"Java": ["J2EE"]}}"#;

pub fn keyword_extraction_prompt(jd_text: &str) -> String {
    KEYWORD_EXTRACTION_PROMPT_TEMPLATE.replace("{jd_text}", jd_text)
}
