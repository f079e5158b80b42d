//! Single-shot evaluators: one instruction template per mode, one backend call,
//! raw response returned unmodified.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::evaluation::prompts::{
    ATS_MATCH_INSTRUCTION, ENHANCE_SECTION_INSTRUCTION_TEMPLATE, HR_REVIEW_INSTRUCTION,
};
use crate::llm_client::prompts::PLAIN_TEXT_ONLY;
use crate::llm_client::{LlmError, ModelBackend, ModelRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// document = resume, reference = job description.
    HrReview,
    /// document = resume, reference = job description.
    AtsMatch,
    /// document = full resume, reference = heading of the section to rewrite.
    EnhanceSection,
}

impl EvaluationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationMode::HrReview => "hr_review",
            EvaluationMode::AtsMatch => "ats_match",
            EvaluationMode::EnhanceSection => "enhance_section",
        }
    }

    /// Whether this mode scores a resume against a job description.
    pub fn is_ats_scan(&self) -> bool {
        matches!(self, EvaluationMode::HrReview | EvaluationMode::AtsMatch)
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown evaluation mode '{}'", self.0)
    }
}

impl FromStr for EvaluationMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hr_review" => Ok(EvaluationMode::HrReview),
            "ats_match" => Ok(EvaluationMode::AtsMatch),
            "enhance_section" => Ok(EvaluationMode::EnhanceSection),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Builds the request for `mode`. Pure; no I/O.
pub fn build_request(
    document_text: &str,
    reference_text: &str,
    mode: EvaluationMode,
) -> ModelRequest {
    match mode {
        EvaluationMode::HrReview => {
            ModelRequest::new(HR_REVIEW_INSTRUCTION, ats_payload(document_text, reference_text))
        }
        EvaluationMode::AtsMatch => {
            ModelRequest::new(ATS_MATCH_INSTRUCTION, ats_payload(document_text, reference_text))
        }
        EvaluationMode::EnhanceSection => {
            let instruction = format!(
                "{}\n\n{}",
                ENHANCE_SECTION_INSTRUCTION_TEMPLATE.replace("{heading}", reference_text.trim()),
                PLAIN_TEXT_ONLY
            );
            ModelRequest::new(instruction, document_text)
        }
    }
}

/// Sends one request and returns the raw model response. No retry.
pub async fn evaluate(
    backend: &dyn ModelBackend,
    document_text: &str,
    reference_text: &str,
    mode: EvaluationMode,
) -> Result<String, LlmError> {
    let request = build_request(document_text, reference_text, mode);
    info!("Running {} evaluation on {}", mode, backend.model());
    backend.complete(&request).await
}

fn ats_payload(resume_text: &str, job_description: &str) -> String {
    format!("Job Description:\n{job_description}\n\nResume Text:\n{resume_text}")
}
