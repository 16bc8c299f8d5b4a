// The fixed-shape assessment prompt. The numbered structure is what
// `parse_match_score` relies on: the model is told to lead with a 0-100 score.

/// Assessment prompt template. Replace `{resume_text}` and `{job_title}`
/// before sending.
pub const ASSESS_PROMPT_TEMPLATE: &str = r#"You are an expert HR recruiter.

Resume:
{resume_text}

Job Title: {job_title}

Please provide:
1. Match score (0 to 100)
2. 3 key strengths
3. 2 weaknesses or missing skills
4. Is this a good fit? (yes/no + reason)
5. 5 interview questions
"#;

pub fn build_assessment_prompt(resume_text: &str, job_title: &str) -> String {
    ASSESS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_title}", job_title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_resume_and_job_title() {
        let prompt = build_assessment_prompt("Ten years of Rust.", "Systems Engineer");
        assert!(prompt.contains("Ten years of Rust."));
        assert!(prompt.contains("Job Title: Systems Engineer"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_title}"));
    }

    #[test]
    fn test_prompt_requests_a_match_score() {
        let prompt = build_assessment_prompt("text", "title");
        assert!(prompt.contains("Match score (0 to 100)"));
    }
}
