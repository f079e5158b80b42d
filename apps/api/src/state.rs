use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelBackend;
use crate::pdf::PdfExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Backend for the three-stage enhancement pipeline.
    pub pipeline_llm: Arc<dyn ModelBackend>,
    /// Backend for heading discovery and section enhancement.
    pub section_llm: Arc<dyn ModelBackend>,
    /// Backend for HR review and ATS match scans.
    pub ats_llm: Arc<dyn ModelBackend>,
    pub pdf: Arc<dyn PdfExtractor>,
}
