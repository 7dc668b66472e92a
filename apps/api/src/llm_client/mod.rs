//! LLM Client: the single point of entry for all Gemini API calls.
//!
//! No other module talks to the provider directly. Handlers receive an
//! `Arc<dyn LlmProvider>` so tests can swap in an in-memory provider.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// Page size requested from the model listing endpoint.
const LIST_PAGE_SIZE: u32 = 1000;
/// Upper bound on listing pages followed, guards against a looping token.
const MAX_LIST_PAGES: usize = 20;
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One entry of the provider's model listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Fully qualified, e.g. `models/gemini-1.5-pro`.
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

/// A single generation call: instructions plus the target model.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub prompt: &'a str,
}

/// The provider seam. `GeminiClient` is the production backend.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn list_models(&self, api_key: &str) -> Result<Vec<ModelInfo>, LlmError>;

    /// Returns the raw text of the model's answer, requested as JSON.
    async fn generate(
        &self,
        api_key: &str,
        request: GenerationRequest<'_>,
    ) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Gemini REST client (`v1beta`). One request per call, no retries.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, LlmError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn list_models(&self, api_key: &str) -> Result<Vec<ModelInfo>, LlmError> {
        let url = format!("{}/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_LIST_PAGES {
            let mut request = self
                .client
                .get(&url)
                .header("x-goog-api-key", api_key)
                .query(&[("pageSize", LIST_PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let page: ListModelsResponse = self.send(request).await?.json().await?;
            models.extend(page.models);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!("Model listing returned {} entries", models.len());
        Ok(models)
    }

    async fn generate(
        &self,
        api_key: &str,
        request: GenerationRequest<'_>,
    ) -> Result<String, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);
        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
            },
        };

        let response = self
            .send(
                self.client
                    .post(&url)
                    .header("x-goog-api-key", api_key)
                    .json(&body),
            )
            .await?;

        let payload: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &payload.usage_metadata {
            debug!(
                "Gemini call succeeded: model={}, prompt_tokens={}, output_tokens={}",
                request.model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        payload.text().ok_or(LlmError::EmptyContent)
    }
}
