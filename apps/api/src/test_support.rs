//! Scripted collaborators for unit and handler tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::llm_client::{LlmError, ModelBackend, ModelRequest};
use crate::pdf::{PdfError, PdfExtractor};
use crate::state::AppState;

/// One scripted backend reply.
pub enum Reply {
    Text(String),
    Fail,
    MissingCredential,
}

/// Model backend that replays scripted replies in order and records every request.
///
/// Once the script runs out it echoes a fixed string, so tests that only care
/// about request shape need not script every call.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn texts(texts: &[&str]) -> Arc<Self> {
        Self::new(texts.iter().map(|t| Reply::Text(t.to_string())).collect())
    }

    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelBackend for ScriptedBackend {
    async fn complete(&self, request: &ModelRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail) => Err(LlmError::Api {
                status: 503,
                message: "scripted failure".to_string(),
            }),
            Some(Reply::MissingCredential) => Err(LlmError::MissingCredential),
            None => Ok("scripted default".to_string()),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

/// PDF extractor that returns fixed text for any non-empty upload.
pub struct StubPdfExtractor {
    pub text: String,
}

impl PdfExtractor for StubPdfExtractor {
    fn extract_text(&self, file: Option<&[u8]>) -> Result<String, PdfError> {
        match file {
            Some(bytes) if !bytes.is_empty() => Ok(self.text.clone()),
            _ => Err(PdfError::NoFile),
        }
    }
}

pub struct TestBackends {
    pub pipeline: Arc<ScriptedBackend>,
    pub section: Arc<ScriptedBackend>,
    pub ats: Arc<ScriptedBackend>,
}

/// Builds an `AppState` over scripted backends and a stub extractor.
pub fn test_state(backends: &TestBackends, pdf_text: &str) -> AppState {
    AppState {
        config: Config::for_tests(),
        pipeline_llm: backends.pipeline.clone(),
        section_llm: backends.section.clone(),
        ats_llm: backends.ats.clone(),
        pdf: Arc::new(StubPdfExtractor {
            text: pdf_text.to_string(),
        }),
    }
}
