use std::sync::Arc;

use crate::assess::Assessor;
use crate::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum
/// extractors. Both collaborators are trait objects so tests can run the
/// handlers against doubles instead of `pdf-extract` and the live API.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn TextExtractor>,
    pub assessor: Arc<dyn Assessor>,
}
