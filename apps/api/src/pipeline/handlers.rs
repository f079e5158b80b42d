//! Axum route handler for the enhancement pipeline.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::pipeline::{Pipeline, PipelineInput};
use crate::state::AppState;

/// Both fields default to empty; empty input is passed through to the model.
#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub run_id: Uuid,
    pub result: String,
}

/// POST /api/v1/enhance
///
/// Runs Analyst → Rewriter → Formatter and returns only the formatter's text.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let run_id = Uuid::new_v4();
    let input = PipelineInput::new(request.resume, request.job_description);
    let pipeline = Pipeline::resume_enhancement()?;

    let result = pipeline
        .run(state.pipeline_llm.as_ref(), &input)
        .instrument(info_span!("pipeline_run", %run_id))
        .await?;

    info!("Pipeline run {run_id} completed");
    Ok(Json(EnhanceResponse { run_id, result }))
}
