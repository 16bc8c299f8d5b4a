//! Extractor — converts one uploaded PDF into plain text.
//!
//! `pdf-extract` does the actual parsing; this module owns the document type,
//! the error surface, and the trait seam that lets tests swap in a double.
//! PDF parsing is CPU-bound, so callers run `extract` inside
//! `tokio::task::spawn_blocking`.

use bytes::Bytes;
use thiserror::Error;

/// An uploaded résumé: a named binary blob owned by the request.
/// Not persisted anywhere; dropped once the response is produced.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Bytes,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document is empty")]
    EmptyDocument,

    #[error("document contains no extractable text")]
    NoText,

    #[error("failed to parse document: {0}")]
    Parse(String),
}

/// The extraction seam. Carried in `AppState` as `Arc<dyn TextExtractor>` so
/// handlers and the ranker can take mock extractors in tests.
///
/// Extraction must be deterministic: identical bytes yield identical text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &Document) -> Result<String, ExtractError>;
}

/// Production extractor backed by the `pdf-extract` crate.
/// Concatenates per-page text in page order and trims surrounding whitespace.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, document: &Document) -> Result<String, ExtractError> {
        if document.bytes.is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        let text = pdf_extract::extract_text_from_mem(&document.bytes)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractError::NoText);
        }

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_rejected() {
        let doc = Document::new("empty.pdf", Bytes::new());
        let err = PdfExtractor.extract(&doc).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyDocument));
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let doc = Document::new("not-a-pdf.pdf", Bytes::from_static(b"definitely not a pdf"));
        let err = PdfExtractor.extract(&doc).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_truncated_header_is_rejected() {
        // A valid magic number with no body behind it.
        let doc = Document::new("truncated.pdf", Bytes::from_static(b"%PDF-1.7"));
        assert!(PdfExtractor.extract(&doc).is_err());
    }
}
