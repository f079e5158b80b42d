//! Stage descriptors: what each stage is told, and what it is allowed to read.

use crate::llm_client::ModelRequest;
use crate::pipeline::prompts::{
    ANALYST_INSTRUCTION, FORMATTER_INSTRUCTION, JOB_DESCRIPTION_END, JOB_DESCRIPTION_START,
    RESUME_END, RESUME_START, REWRITER_INSTRUCTION,
};
use crate::pipeline::{PipelineInput, StageName, StageResult};

/// Where a stage's payload comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageInput {
    /// The caller's resume and job description. Only valid for the first stage.
    Original,
    /// Exactly the previous stage's output text.
    PreviousOutput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageDescriptor {
    pub name: StageName,
    pub instruction: &'static str,
    pub input: StageInput,
}

impl StageDescriptor {
    /// Builds this stage's request.
    ///
    /// Returns `None` when the stage reads the previous output and there is none;
    /// `Pipeline::new` rules that shape out before a run starts.
    pub fn build_request(
        &self,
        input: &PipelineInput,
        previous: Option<&StageResult>,
    ) -> Option<ModelRequest> {
        let payload = match self.input {
            StageInput::Original => original_payload(input),
            StageInput::PreviousOutput => previous?.output_text.clone(),
        };
        Some(ModelRequest::new(self.instruction, payload))
    }
}

/// The resume enhancement stages, in run order.
pub fn resume_enhancement_stages() -> Vec<StageDescriptor> {
    vec![
        StageDescriptor {
            name: StageName::Analyst,
            instruction: ANALYST_INSTRUCTION,
            input: StageInput::Original,
        },
        StageDescriptor {
            name: StageName::Rewriter,
            instruction: REWRITER_INSTRUCTION,
            input: StageInput::PreviousOutput,
        },
        StageDescriptor {
            name: StageName::Formatter,
            instruction: FORMATTER_INSTRUCTION,
            input: StageInput::PreviousOutput,
        },
    ]
}

fn original_payload(input: &PipelineInput) -> String {
    format!(
        "Here is the resume to analyze:\n{RESUME_START}\n{}\n{RESUME_END}\n\n\
         And here is the job description to compare it against:\n\
         {JOB_DESCRIPTION_START}\n{}\n{JOB_DESCRIPTION_END}",
        input.resume_text, input.job_description_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_is_analyst_rewriter_formatter() {
        let names: Vec<StageName> = resume_enhancement_stages()
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            vec![StageName::Analyst, StageName::Rewriter, StageName::Formatter]
        );
    }

    #[test]
    fn test_only_first_stage_reads_original_input() {
        let stages = resume_enhancement_stages();
        assert_eq!(stages[0].input, StageInput::Original);
        assert!(stages[1..]
            .iter()
            .all(|s| s.input == StageInput::PreviousOutput));
    }

    #[test]
    fn test_each_stage_has_its_own_instruction() {
        let stages = resume_enhancement_stages();
        assert_ne!(stages[0].instruction, stages[1].instruction);
        assert_ne!(stages[1].instruction, stages[2].instruction);
        assert_ne!(stages[0].instruction, stages[2].instruction);
    }

    #[test]
    fn test_original_payload_wraps_both_texts_in_delimiters() {
        let input = PipelineInput::new("Jane Doe\nRust engineer", "Senior Rust role");
        let request = resume_enhancement_stages()[0]
            .build_request(&input, None)
            .unwrap();

        assert_eq!(request.instruction, ANALYST_INSTRUCTION);
        let resume_at = request.payload.find("Jane Doe\nRust engineer").unwrap();
        let jd_at = request.payload.find("Senior Rust role").unwrap();
        assert!(request.payload.find(RESUME_START).unwrap() < resume_at);
        assert!(resume_at < request.payload.find(RESUME_END).unwrap());
        assert!(request.payload.find(JOB_DESCRIPTION_START).unwrap() < jd_at);
        assert!(jd_at < request.payload.find(JOB_DESCRIPTION_END).unwrap());
    }

    #[test]
    fn test_previous_output_stage_uses_upstream_text_verbatim() {
        let input = PipelineInput::new("resume", "job description");
        let previous = StageResult {
            stage_name: StageName::Analyst,
            output_text: "## Strategic Brief\n- add Kubernetes".to_string(),
        };
        let request = resume_enhancement_stages()[1]
            .build_request(&input, Some(&previous))
            .unwrap();

        assert_eq!(request.payload, previous.output_text);
        assert_eq!(request.instruction, REWRITER_INSTRUCTION);
    }

    #[test]
    fn test_previous_output_stage_without_upstream_builds_nothing() {
        let input = PipelineInput::default();
        assert!(resume_enhancement_stages()[2]
            .build_request(&input, None)
            .is_none());
    }
}
