//! Axum route handlers for ATS scanning and section enhancement.

use std::collections::HashMap;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::evaluation::evaluator::{evaluate, EvaluationMode};
use crate::evaluation::headings::extract_headings;
use crate::pdf::extract_upload;
use crate::state::AppState;

/// Multipart field carrying the PDF.
const FILE_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AtsEvaluationResponse {
    pub mode: EvaluationMode,
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct HeadingsResponse {
    pub headings: Vec<String>,
    /// Extracted resume text; sent back with `/sections/enhance`.
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceSectionRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub heading: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceSectionResponse {
    pub heading: String,
    pub enhanced: String,
}

/// The PDF upload plus any text fields that came with it.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<Bytes>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// A trimmed, non-empty text field.
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == FILE_FIELD {
            form.file = Some(field.bytes().await?);
        } else {
            let value = field.text().await?;
            form.fields.insert(name, value);
        }
    }
    Ok(form)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/evaluate
///
/// Multipart: `resume` (PDF), `job_description`, `mode` (`hr_review` | `ats_match`,
/// default `ats_match`). Every input is validated before the model is called.
pub async fn handle_ats_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AtsEvaluationResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let mode = match form.field("mode") {
        Some(raw) => raw
            .parse::<EvaluationMode>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
        None => EvaluationMode::AtsMatch,
    };
    if !mode.is_ats_scan() {
        return Err(AppError::Validation(format!(
            "mode must be hr_review or ats_match, got {mode}"
        )));
    }

    let job_description = form
        .field("job_description")
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?
        .to_string();

    let resume_text = extract_upload(state.pdf.clone(), form.file).await?;

    let result = evaluate(
        state.ats_llm.as_ref(),
        &resume_text,
        &job_description,
        mode,
    )
    .await
    .map_err(AppError::evaluation)?;

    Ok(Json(AtsEvaluationResponse { mode, result }))
}

/// POST /api/v1/sections/headings
///
/// Multipart: `resume` (PDF). Returns the headings the model finds plus the
/// extracted text, which the client sends back when enhancing a section.
pub async fn handle_section_headings(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<HeadingsResponse>, AppError> {
    let form = read_upload_form(multipart).await?;
    let content = extract_upload(state.pdf.clone(), form.file).await?;

    let headings = extract_headings(state.section_llm.as_ref(), &content)
        .await
        .map_err(AppError::evaluation)?;

    Ok(Json(HeadingsResponse { headings, content }))
}

/// POST /api/v1/sections/enhance
pub async fn handle_section_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceSectionRequest>,
) -> Result<Json<EnhanceSectionResponse>, AppError> {
    let heading = request.heading.trim();
    if heading.is_empty() {
        return Err(AppError::Validation("heading cannot be empty".to_string()));
    }
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let enhanced = evaluate(
        state.section_llm.as_ref(),
        &request.content,
        heading,
        EvaluationMode::EnhanceSection,
    )
    .await
    .map_err(AppError::evaluation)?;

    Ok(Json(EnhanceSectionResponse {
        heading: heading.to_string(),
        enhanced,
    }))
}
