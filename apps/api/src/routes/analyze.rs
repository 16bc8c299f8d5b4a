//! Axum route handlers for the analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::extract::Document;
use crate::rank::{rank, DEFAULT_TOP_K};
use crate::state::AppState;

/// POST /analyze
///
/// Multipart fields: `resume` (one PDF) and `job_title` (text).
/// Returns `{"result": <assessment narrative>}`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut resume: Option<Document> = None;
    let mut job_title: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("resume") => {
                let name = field.file_name().unwrap_or("resume.pdf").to_string();
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                resume = Some(Document::new(name, bytes));
            }
            Some("job_title") => {
                job_title = Some(field.text().await.map_err(bad_multipart)?);
            }
            _ => {}
        }
    }

    let resume = resume
        .ok_or_else(|| AppError::MissingInput("Missing resume or job title".to_string()))?;
    let job_title = require_job_title(job_title)?;

    let extractor = Arc::clone(&state.extractor);
    let text = tokio::task::spawn_blocking(move || extractor.extract(&resume))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    let assessment = state.assessor.assess(&text, &job_title).await?;

    Ok(Json(json!({ "result": assessment.narrative })))
}

/// POST /bulk_analyze
///
/// Multipart fields: `resumes` (repeated PDFs), `job_title` (text), and an
/// optional `top_k` (positive integer, default 10).
/// Returns `{"results": [{"name", "score"}, ...]}`, best match first.
///
/// Individual documents that fail to extract or assess stay in the results
/// at the sentinel score; the request as a whole still succeeds.
pub async fn handle_bulk_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut documents: Vec<Document> = Vec::new();
    let mut job_title: Option<String> = None;
    let mut top_k = DEFAULT_TOP_K;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("resumes") => {
                let name = field.file_name().unwrap_or("resume.pdf").to_string();
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                documents.push(Document::new(name, bytes));
            }
            Some("job_title") => {
                job_title = Some(field.text().await.map_err(bad_multipart)?);
            }
            Some("top_k") => {
                let raw = field.text().await.map_err(bad_multipart)?;
                top_k = raw
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|k| *k > 0)
                    .ok_or_else(|| {
                        AppError::MissingInput(format!(
                            "top_k must be a positive integer, got '{raw}'"
                        ))
                    })?;
            }
            _ => {}
        }
    }

    let job_title = require_job_title(job_title)?;

    let results = rank(
        Arc::clone(&state.extractor),
        state.assessor.as_ref(),
        documents,
        &job_title,
        top_k,
    )
    .await;

    Ok(Json(json!({ "results": results })))
}

fn require_job_title(job_title: Option<String>) -> Result<String, AppError> {
    match job_title {
        Some(title) if !title.trim().is_empty() => Ok(title.trim().to_string()),
        _ => Err(AppError::MissingInput("Missing job title".to_string())),
    }
}

fn bad_multipart(e: MultipartError) -> AppError {
    AppError::MissingInput(format!("Invalid multipart body: {e}"))
}
