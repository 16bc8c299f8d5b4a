//! Batch ranker — fans out extraction and assessment over a set of uploaded
//! résumés, then produces a deterministic top-K ordering.
//!
//! Failure policy: a document that cannot be extracted or assessed is kept in
//! the result at `SENTINEL_SCORE` rather than dropped, so nothing the caller
//! submitted silently disappears. One bad upload never aborts the batch.
//!
//! Documents are processed strictly sequentially; the only suspension point
//! per document is the LLM call, which carries the client's request timeout.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::assess::{Assessor, SENTINEL_SCORE};
use crate::extract::{Document, TextExtractor};
use crate::llm_client::LlmError;

/// Default number of entries returned from a batch.
pub const DEFAULT_TOP_K: usize = 10;

/// One ranked result: the submitted file name and its match score.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankedEntry {
    pub name: String,
    pub score: i32,
}

#[derive(Debug, thiserror::Error)]
enum ScoreError {
    #[error(transparent)]
    Extract(#[from] crate::extract::ExtractError),

    #[error(transparent)]
    Assess(#[from] LlmError),

    #[error("extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Ranks `documents` against `job_title`, best match first.
///
/// Output length is `min(documents.len(), top_k)`. Sorting is by score
/// descending; equal scores keep submission order (`Vec::sort_by` is stable).
pub async fn rank(
    extractor: Arc<dyn TextExtractor>,
    assessor: &dyn Assessor,
    documents: Vec<Document>,
    job_title: &str,
    top_k: usize,
) -> Vec<RankedEntry> {
    let total = documents.len();
    let mut entries = Vec::with_capacity(total);

    for document in documents {
        let name = document.name.clone();

        let score = match score_document(&extractor, assessor, document, job_title).await {
            Ok(score) => score,
            Err(e) => {
                warn!("Scoring failed for '{name}', assigning sentinel: {e}");
                SENTINEL_SCORE
            }
        };

        entries.push(RankedEntry { name, score });
    }

    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(top_k);

    info!(
        "Ranked batch of {total} document(s), returning top {}",
        entries.len()
    );

    entries
}

/// Runs one document through the full pipeline: extract → assess → score.
async fn score_document(
    extractor: &Arc<dyn TextExtractor>,
    assessor: &dyn Assessor,
    document: Document,
    job_title: &str,
) -> Result<i32, ScoreError> {
    let extractor = Arc::clone(extractor);
    let text =
        tokio::task::spawn_blocking(move || extractor.extract(&document)).await??;

    let assessment = assessor.assess(&text, job_title).await?;
    Ok(assessment.score)
}
