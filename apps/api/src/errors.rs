use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::pdf::PdfError;
use crate::pipeline::PipelineError;

/// Shown when the enhancement pipeline fails at any stage.
pub const PIPELINE_FAILURE_MESSAGE: &str =
    "Sorry, we encountered an error while enhancing your resume. Please try again later.";

/// Shown when a single-shot evaluator call fails.
pub const EVALUATION_FAILURE_MESSAGE: &str = "Sorry, I am unable to process this request at \
    the moment. Please check your API key and network connection.";

/// Shown when no model API key is configured.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "The AI service is not configured: GROQ_API_KEY is not set.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Backend failure detail is logged, never returned: callers only ever see
/// the fixed messages above.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No file uploaded")]
    NoFile,

    #[error("Unreadable PDF: {0}")]
    UnreadablePdf(String),

    #[error("Model credential missing")]
    MissingCredential,

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Evaluation error: {0}")]
    Evaluation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps a failed evaluator call, keeping the credential case distinct.
    pub fn evaluation(err: LlmError) -> Self {
        match err {
            LlmError::MissingCredential => AppError::MissingCredential,
            other => AppError::Evaluation(other.to_string()),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Backend {
                source: LlmError::MissingCredential,
                ..
            } => AppError::MissingCredential,
            err @ PipelineError::Backend { .. } => AppError::Pipeline(err.to_string()),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl From<PdfError> for AppError {
    fn from(err: PdfError) -> Self {
        match err {
            PdfError::NoFile => AppError::NoFile,
            PdfError::Unreadable(msg) => AppError::UnreadablePdf(msg),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Validation(format!("Invalid upload: {}", err.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NoFile => (
                StatusCode::BAD_REQUEST,
                "NO_FILE",
                "No file uploaded".to_string(),
            ),
            AppError::UnreadablePdf(msg) => {
                tracing::warn!("Unreadable PDF: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNREADABLE_PDF",
                    "The uploaded file could not be read as a PDF".to_string(),
                )
            }
            AppError::MissingCredential => {
                tracing::error!("Model call attempted without GROQ_API_KEY");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "MISSING_CREDENTIAL",
                    MISSING_CREDENTIAL_MESSAGE.to_string(),
                )
            }
            AppError::Pipeline(msg) => {
                tracing::error!("Error during pipeline execution: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PIPELINE_ERROR",
                    PIPELINE_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Evaluation(msg) => {
                tracing::error!("Error calling LLM API: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EVALUATION_ERROR",
                    EVALUATION_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
