use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmProvider;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; swapped for an in-memory provider in tests.
    pub llm: Arc<dyn LlmProvider>,
    pub config: Config,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn api_key(&self) -> Option<&str> {
        self.config.google_api_key.as_deref()
    }
}
