//! Test doubles shared by unit and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{GenerationRequest, LlmError, LlmProvider, ModelInfo};

/// In-memory provider that records every call it receives.
pub struct RecordingProvider {
    reply: Mutex<Result<String, (u16, String)>>,
    listing: Result<Vec<ModelInfo>, (u16, String)>,
    generate_calls: AtomicUsize,
    list_calls: AtomicUsize,
    last_model: Mutex<Option<String>>,
    last_prompt: Mutex<Option<String>>,
}

impl RecordingProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Mutex::new(Ok(text.to_string())),
            listing: Ok(Vec::new()),
            generate_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            last_model: Mutex::new(None),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Mutex::new(Err((status, message.to_string()))),
            ..Self::replying("")
        }
    }

    /// `methods` is a comma-separated list, e.g. `"generateContent,countTokens"`.
    pub fn with_models(mut self, models: &[(&str, &str)]) -> Self {
        self.listing = Ok(models
            .iter()
            .map(|(name, methods)| ModelInfo {
                name: name.to_string(),
                supported_generation_methods: methods.split(',').map(str::to_string).collect(),
            })
            .collect());
        self
    }

    pub fn with_listing_error(mut self, status: u16, message: &str) -> Self {
        self.listing = Err((status, message.to_string()));
        self
    }

    /// Changes what later `generate` calls return.
    pub fn set_reply(&self, text: &str) {
        *self.reply.lock().unwrap() = Ok(text.to_string());
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn last_model(&self) -> Option<String> {
        self.last_model.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

fn api_error((status, message): &(u16, String)) -> LlmError {
    LlmError::Api {
        status: *status,
        message: message.clone(),
    }
}

#[async_trait]
impl LlmProvider for RecordingProvider {
    async fn list_models(&self, _api_key: &str) -> Result<Vec<ModelInfo>, LlmError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.listing.clone().map_err(|e| api_error(&e))
    }

    async fn generate(
        &self,
        _api_key: &str,
        request: GenerationRequest<'_>,
    ) -> Result<String, LlmError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_model.lock().unwrap() = Some(request.model.to_string());
        *self.last_prompt.lock().unwrap() = Some(request.prompt.to_string());
        self.reply.lock().unwrap().clone().map_err(|e| api_error(&e))
    }
}

/// A well-formed three-record model reply.
pub fn sample_response() -> String {
    serde_json::json!([
        {
            "majorName": "Computer Science",
            "introduction": "The study of computation and software.",
            "reason": "You enjoy coding and want to build software.",
            "curriculum": ["Data Structures", "Algorithms", "Operating Systems"],
            "career": ["Software engineer", "AI researcher"]
        },
        {
            "majorName": "Environmental Engineering",
            "introduction": "Engineering solutions for environmental problems.",
            "reason": "It connects your interest in the environment with math.",
            "curriculum": ["Hydrology", "Air Quality Engineering"],
            "career": ["Environmental consultant", "Public sector engineer"]
        },
        {
            "majorName": "Statistics",
            "introduction": "The science of learning from data.",
            "reason": "Math is your favorite subject.",
            "curriculum": ["Probability", "Regression Analysis"],
            "career": ["Data scientist", "Actuary"]
        }
    ])
    .to_string()
}
