//! PDF text extraction.
//!
//! Extraction is CPU-bound and synchronous; handlers run it through
//! `extract_upload`, which moves the work onto the blocking thread pool.

use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Could not read PDF: {0}")]
    Unreadable(String),

    #[error("PDF extraction task failed: {0}")]
    Task(String),
}

/// Accepts PDF bytes (or their absence) and returns plain text.
pub trait PdfExtractor: Send + Sync {
    /// `None` or an empty upload is a "no file" failure.
    fn extract_text(&self, file: Option<&[u8]>) -> Result<String, PdfError>;
}

/// Production extractor backed by the `pdf-extract` crate.
pub struct PdfExtractLib;

impl PdfExtractor for PdfExtractLib {
    fn extract_text(&self, file: Option<&[u8]>) -> Result<String, PdfError> {
        let bytes = match file {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Err(PdfError::NoFile),
        };

        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| PdfError::Unreadable(e.to_string()))?;

        debug!(
            "Extracted {} chars from {} byte PDF",
            text.len(),
            bytes.len()
        );
        Ok(text.trim().to_string())
    }
}

/// Runs the extractor on the blocking pool.
///
/// A missing upload is rejected here, before any thread is spawned.
pub async fn extract_upload(
    extractor: Arc<dyn PdfExtractor>,
    file: Option<Bytes>,
) -> Result<String, PdfError> {
    let file = file.filter(|f| !f.is_empty()).ok_or(PdfError::NoFile)?;

    tokio::task::spawn_blocking(move || extractor.extract_text(Some(&file[..])))
        .await
        .map_err(|e| PdfError::Task(e.to_string()))?
}
