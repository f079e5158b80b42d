//! Section heading discovery for an uploaded resume.

use tracing::info;

use crate::evaluation::prompts::HEADINGS_INSTRUCTION;
use crate::llm_client::prompts::PLAIN_TEXT_ONLY;
use crate::llm_client::{LlmError, ModelBackend, ModelRequest};

/// Asks the model for the document's headings.
///
/// A blank document yields no headings and makes no backend call.
pub async fn extract_headings(
    backend: &dyn ModelBackend,
    document_text: &str,
) -> Result<Vec<String>, LlmError> {
    if document_text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let request = ModelRequest::new(
        format!("{HEADINGS_INSTRUCTION}\n\n{PLAIN_TEXT_ONLY}"),
        document_text,
    );
    let raw = backend.complete(&request).await?;
    let headings = parse_headings(&raw);
    info!("Found {} headings", headings.len());
    Ok(headings)
}

/// Splits a comma-separated model answer into clean headings.
/// Markdown emphasis is stripped and blank items are dropped.
pub fn parse_headings(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|h| h.replace('*', "").trim().to_string())
        .filter(|h| !h.is_empty())
        .collect()
}
