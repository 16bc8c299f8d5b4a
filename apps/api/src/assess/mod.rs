//! Assessor — judges one résumé against a job title via the hosted LLM.
//!
//! The model replies in prose. Ranking needs a number, so the assessor pulls
//! the match score back out of the narrative; a narrative with no parseable
//! score gets `SENTINEL_SCORE` rather than failing, so the batch path can
//! still rank it (at the bottom).

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::{LlmClient, LlmError};

pub mod prompt;

/// Sentinel score assigned when no valid score can be obtained for a
/// document. Strictly lower than any valid score (valid range is 0-100).
pub const SENTINEL_SCORE: i32 = -1;

/// One assessment: the model's full narrative plus the score parsed from it.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub narrative: String,
    pub score: i32,
}

/// The assessment seam. Carried in `AppState` as `Arc<dyn Assessor>` so
/// handlers and the ranker can take test doubles instead of a live API.
#[async_trait]
pub trait Assessor: Send + Sync {
    async fn assess(&self, resume_text: &str, job_title: &str) -> Result<Assessment, LlmError>;
}

/// Production assessor backed by the OpenRouter client.
pub struct LlmAssessor {
    llm: LlmClient,
}

impl LlmAssessor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Assessor for LlmAssessor {
    async fn assess(&self, resume_text: &str, job_title: &str) -> Result<Assessment, LlmError> {
        let prompt = prompt::build_assessment_prompt(resume_text, job_title);
        let narrative = self.llm.complete(&prompt).await?;

        let score = match parse_match_score(&narrative) {
            Some(score) => score,
            None => {
                warn!("LLM narrative contained no parseable match score, assigning sentinel");
                SENTINEL_SCORE
            }
        };

        Ok(Assessment { narrative, score })
    }
}

/// Finds the match score in an assessment narrative.
///
/// Candidate lines are tried from most to least specific: lines saying
/// "match score", then colon-bearing "score" lines, then any "score" line.
/// Prose like "Scores below are out of 100." must not shadow the actual
/// "Match score: 64" value further down.
///
/// Within a line, digits after the last colon are preferred so range
/// annotations like "(0 to 100):" and list numbering do not shadow the
/// actual value.
pub fn parse_match_score(narrative: &str) -> Option<i32> {
    score_from_lines(narrative, |line| {
        line.contains("match") && line.contains("score")
    })
    .or_else(|| score_from_lines(narrative, |line| line.contains("score") && line.contains(':')))
    .or_else(|| score_from_lines(narrative, |line| line.contains("score")))
}

fn score_from_lines(narrative: &str, is_candidate: impl Fn(&str) -> bool) -> Option<i32> {
    for line in narrative.lines() {
        if !is_candidate(&line.to_lowercase()) {
            continue;
        }

        let segment = match line.rsplit_once(':') {
            Some((_, rest)) => rest,
            None => line,
        };

        if let Some(score) = first_int_in_score_range(segment) {
            return Some(score);
        }
    }

    None
}

/// Returns the first integer in `[0, 100]` found in `segment`, skipping
/// out-of-range values like the "100" bound in "85/100".
fn first_int_in_score_range(segment: &str) -> Option<i32> {
    let mut digits = String::new();

    // Trailing space flushes a run of digits ending at the segment boundary.
    for ch in segment.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if !digits.is_empty() {
            if let Ok(value) = digits.parse::<i32>() {
                if (0..=100).contains(&value) {
                    return Some(value);
                }
            }
            digits.clear();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_score_line() {
        let narrative = "Match score: 85\n\nStrengths:\n- Rust";
        assert_eq!(parse_match_score(narrative), Some(85));
    }

    #[test]
    fn test_parse_numbered_list_with_range_annotation() {
        let narrative = "1. Match score (0 to 100): 90\n2. Key strengths: ...";
        assert_eq!(parse_match_score(narrative), Some(90));
    }

    #[test]
    fn test_parse_markdown_bold_with_denominator() {
        let narrative = "**Match Score:** 72/100\n\n**Strengths**";
        assert_eq!(parse_match_score(narrative), Some(72));
    }

    #[test]
    fn test_parse_score_without_colon() {
        let narrative = "The match score is 40 out of 100.";
        assert_eq!(parse_match_score(narrative), Some(40));
    }

    #[test]
    fn test_boundary_scores() {
        assert_eq!(parse_match_score("Match score: 0"), Some(0));
        assert_eq!(parse_match_score("Match score: 100"), Some(100));
    }

    #[test]
    fn test_narrative_without_score_yields_none() {
        let narrative = "This candidate looks like a strong fit for the role.";
        assert_eq!(parse_match_score(narrative), None);
    }

    #[test]
    fn test_preamble_mentioning_scores_does_not_shadow_match_score() {
        let narrative = "Scores below are out of 100.\n\nMatch score: 64\n\nStrengths: ...";
        assert_eq!(parse_match_score(narrative), Some(64));
    }

    #[test]
    fn test_colon_bearing_score_line_beats_bare_mention() {
        let narrative = "This resume scores well overall.\nOverall score: 58";
        assert_eq!(parse_match_score(narrative), Some(58));
    }

    #[test]
    fn test_score_line_without_number_is_skipped() {
        let narrative = "Score: to be determined\nFinal score: 55";
        assert_eq!(parse_match_score(narrative), Some(55));
    }

    #[test]
    fn test_out_of_range_value_is_ignored() {
        assert_eq!(parse_match_score("Match score: 850"), None);
    }
}
