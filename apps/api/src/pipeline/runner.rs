//! Stage Runner — executes the stage list strictly in order.
//!
//! Stage N+1 is built from stage N's `StageResult` only, so it cannot start
//! until stage N has completed. The first failed backend call aborts the run;
//! nothing partial is returned.

use thiserror::Error;
use tracing::info;

use crate::llm_client::{LlmError, ModelBackend};
use crate::pipeline::stages::{resume_enhancement_stages, StageDescriptor, StageInput};
use crate::pipeline::{PipelineInput, StageName, StageResult};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("pipeline has no stages")]
    NoStages,

    #[error("stage {stage} at position {position} reads the wrong input")]
    InvalidStageOrder { position: usize, stage: StageName },

    #[error("{stage} stage failed: {source}")]
    Backend {
        stage: StageName,
        #[source]
        source: LlmError,
    },
}

/// A validated, ordered list of stages.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<StageDescriptor>,
}

impl Pipeline {
    /// Validates the stage list: the first stage must read the original input
    /// and every later stage must read its predecessor's output.
    pub fn new(stages: Vec<StageDescriptor>) -> Result<Self, PipelineError> {
        if stages.is_empty() {
            return Err(PipelineError::NoStages);
        }

        for (position, stage) in stages.iter().enumerate() {
            let expected = if position == 0 {
                StageInput::Original
            } else {
                StageInput::PreviousOutput
            };
            if stage.input != expected {
                return Err(PipelineError::InvalidStageOrder {
                    position,
                    stage: stage.name,
                });
            }
        }

        Ok(Self { stages })
    }

    /// Analyst → Rewriter → Formatter.
    pub fn resume_enhancement() -> Result<Self, PipelineError> {
        Self::new(resume_enhancement_stages())
    }

    pub fn stages(&self) -> &[StageDescriptor] {
        &self.stages
    }

    /// Runs every stage in order and returns the last stage's output text.
    ///
    /// Empty inputs are passed through; every stage still calls the backend.
    pub async fn run(
        &self,
        backend: &dyn ModelBackend,
        input: &PipelineInput,
    ) -> Result<String, PipelineError> {
        let mut previous: Option<StageResult> = None;

        for (position, stage) in self.stages.iter().enumerate() {
            let request = stage.build_request(input, previous.as_ref()).ok_or(
                PipelineError::InvalidStageOrder {
                    position,
                    stage: stage.name,
                },
            )?;

            info!(
                "Stage {}/{} ({}) started on {}",
                position + 1,
                self.stages.len(),
                stage.name,
                backend.model()
            );

            let output_text =
                backend
                    .complete(&request)
                    .await
                    .map_err(|source| PipelineError::Backend {
                        stage: stage.name,
                        source,
                    })?;

            info!(
                "Stage {} finished: {} chars",
                stage.name,
                output_text.chars().count()
            );

            previous = Some(StageResult {
                stage_name: stage.name,
                output_text,
            });
        }

        let last = previous.ok_or(PipelineError::NoStages)?;
        info!("Pipeline finished after the {} stage", last.stage_name);
        Ok(last.output_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::prompts::{ANALYST_INSTRUCTION, FORMATTER_INSTRUCTION};
    use crate::test_support::{Reply, ScriptedBackend};

    fn pipeline() -> Pipeline {
        Pipeline::resume_enhancement().unwrap()
    }

    #[tokio::test]
    async fn test_run_returns_formatter_output() {
        let backend = ScriptedBackend::texts(&["brief", "rewrite", "final resume"]);
        let input = PipelineInput::new("my resume", "the job");

        let result = pipeline().run(backend.as_ref(), &input).await.unwrap();

        assert_eq!(result, "final resume");
        assert_eq!(backend.call_count(), 3);
    }

    #[tokio::test]
    async fn test_rewriter_payload_is_exactly_analyst_output() {
        let backend = ScriptedBackend::texts(&["ANALYST BRIEF", "REWRITE", "FINAL"]);
        let input = PipelineInput::new("resume body", "UNIQUE-JD-MARKER");

        pipeline().run(backend.as_ref(), &input).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests[1].payload, "ANALYST BRIEF");
        assert!(!requests[1].payload.contains("UNIQUE-JD-MARKER"));
        assert!(!requests[1].instruction.contains("UNIQUE-JD-MARKER"));
    }

    #[tokio::test]
    async fn test_formatter_payload_is_exactly_rewriter_output() {
        let backend = ScriptedBackend::texts(&["brief", "Rewritten\n\nresume", "final"]);
        let input = PipelineInput::new("resume body", "job text");

        pipeline().run(backend.as_ref(), &input).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests[2].payload, "Rewritten\n\nresume");
        assert_eq!(requests[2].instruction, FORMATTER_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_only_analyst_sees_raw_inputs() {
        let backend = ScriptedBackend::texts(&["brief", "rewrite", "final"]);
        let input = PipelineInput::new("RESUME-MARKER", "JD-MARKER");

        pipeline().run(backend.as_ref(), &input).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests[0].instruction, ANALYST_INSTRUCTION);
        assert!(requests[0].payload.contains("RESUME-MARKER"));
        assert!(requests[0].payload.contains("JD-MARKER"));
        for request in &requests[1..] {
            assert!(!request.payload.contains("RESUME-MARKER"));
            assert!(!request.payload.contains("JD-MARKER"));
        }
    }

    #[tokio::test]
    async fn test_analyst_failure_stops_the_run() {
        let backend = ScriptedBackend::new(vec![
            Reply::Fail,
            Reply::Text("never".to_string()),
            Reply::Text("never".to_string()),
        ]);

        let err = pipeline()
            .run(backend.as_ref(), &PipelineInput::new("r", "j"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Backend {
                stage: StageName::Analyst,
                ..
            }
        ));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_rewriter_failure_returns_no_partial_output() {
        let backend = ScriptedBackend::new(vec![
            Reply::Text("brief".to_string()),
            Reply::Fail,
            Reply::Text("never".to_string()),
        ]);

        let err = pipeline()
            .run(backend.as_ref(), &PipelineInput::new("r", "j"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Backend {
                stage: StageName::Rewriter,
                ..
            }
        ));
        assert_eq!(backend.call_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_credential_is_carried_in_error() {
        let backend = ScriptedBackend::new(vec![Reply::MissingCredential]);

        let err = pipeline()
            .run(backend.as_ref(), &PipelineInput::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Backend {
                source: LlmError::MissingCredential,
                ..
            }
        ));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_input_still_runs_three_stages() {
        let backend = ScriptedBackend::texts(&["a", "b", "c"]);

        let result = pipeline()
            .run(backend.as_ref(), &PipelineInput::new("", ""))
            .await
            .unwrap();

        assert_eq!(result, "c");
        assert_eq!(backend.call_count(), 3);
    }

    #[test]
    fn test_empty_stage_list_is_rejected() {
        assert!(matches!(
            Pipeline::new(vec![]),
            Err(PipelineError::NoStages)
        ));
    }

    #[test]
    fn test_first_stage_must_read_original_input() {
        let mut stages = resume_enhancement_stages();
        stages.remove(0);
        let err = Pipeline::new(stages).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidStageOrder {
                position: 0,
                stage: StageName::Rewriter
            }
        ));
    }

    #[test]
    fn test_later_stage_may_not_skip_back_to_original_input() {
        let mut stages = resume_enhancement_stages();
        stages[2].input = StageInput::Original;
        let err = Pipeline::new(stages).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidStageOrder {
                position: 2,
                stage: StageName::Formatter
            }
        ));
    }

    #[tokio::test]
    async fn test_single_stage_pipeline_returns_its_output() {
        let stages = resume_enhancement_stages().into_iter().take(1).collect();
        let pipeline = Pipeline::new(stages).unwrap();
        let backend = ScriptedBackend::texts(&["just the brief"]);

        let result = pipeline
            .run(backend.as_ref(), &PipelineInput::new("r", "j"))
            .await
            .unwrap();

        assert_eq!(result, "just the brief");
        assert_eq!(backend.call_count(), 1);
    }
}
