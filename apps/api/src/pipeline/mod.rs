//! Sequential Enhancement Pipeline.
//!
//! Analyst → Content Rewriter → Formatter. Each stage hands its output text to
//! the next one and nothing else; only the analyst sees the raw resume and job
//! description. No branching, no retry, no parallelism.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod handlers;
pub mod prompts;
pub mod runner;
pub mod stages;

pub use runner::{Pipeline, PipelineError};

/// The caller's raw texts. Immutable for the duration of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineInput {
    pub resume_text: String,
    pub job_description_text: String,
}

impl PipelineInput {
    pub fn new(resume_text: impl Into<String>, job_description_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_description_text: job_description_text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    Analyst,
    Rewriter,
    Formatter,
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageName::Analyst => "analyst",
            StageName::Rewriter => "rewriter",
            StageName::Formatter => "formatter",
        };
        f.write_str(name)
    }
}

/// Output of one stage. Consumed only by the immediately following stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageResult {
    pub stage_name: StageName,
    pub output_text: String,
}
