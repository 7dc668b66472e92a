//! Model Catalog Resolver: the list of selectable Gemini model identifiers.
//!
//! Without a key, or when listing fails, the static fallback pair is used.
//! A listing failure is never fatal: it only produces a warning for the sidebar.

use serde::Serialize;
use tracing::warn;

use crate::llm_client::{LlmProvider, ModelInfo};

/// Used when no key is configured or the provider listing is unusable.
pub const FALLBACK_MODELS: [&str; 2] = ["gemini-1.5-flash", "gemini-1.5-pro"];

const GENERATE_METHOD: &str = "generateContent";
const FAMILY_MARKER: &str = "gemini";
const NAME_PREFIX: &str = "models/";

pub const CATALOG_REFRESH_WARNING: &str =
    "Could not refresh the model list. Using the default models.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCatalog {
    pub models: Vec<String>,
    /// Non-fatal warning shown in the sidebar when the listing call failed.
    pub warning: Option<String>,
}

impl ModelCatalog {
    pub fn fallback() -> Self {
        Self {
            models: FALLBACK_MODELS.iter().map(|m| m.to_string()).collect(),
            warning: None,
        }
    }

    /// The model a submission should use: the requested one when it is listed,
    /// otherwise the first entry.
    pub fn select<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .filter(|r| self.models.iter().any(|m| m == r))
            .or_else(|| self.models.first().map(String::as_str))
            .unwrap_or(FALLBACK_MODELS[0])
    }
}

pub async fn resolve_catalog(llm: &dyn LlmProvider, api_key: Option<&str>) -> ModelCatalog {
    let Some(api_key) = api_key else {
        return ModelCatalog::fallback();
    };

    match llm.list_models(api_key).await {
        Ok(listing) => {
            let models = generation_models(&listing);
            if models.is_empty() {
                ModelCatalog::fallback()
            } else {
                ModelCatalog {
                    models,
                    warning: None,
                }
            }
        }
        Err(e) => {
            warn!("Model listing failed, using fallback catalog: {e}");
            ModelCatalog {
                warning: Some(CATALOG_REFRESH_WARNING.to_string()),
                ..ModelCatalog::fallback()
            }
        }
    }
}

/// Generation-capable Gemini models, prefix stripped, sorted descending.
fn generation_models(listing: &[ModelInfo]) -> Vec<String> {
    let mut models: Vec<String> = listing
        .iter()
        .filter(|m| m.supported_generation_methods.iter().any(|g| g == GENERATE_METHOD))
        .filter(|m| m.name.contains(FAMILY_MARKER))
        .map(|m| m.name.strip_prefix(NAME_PREFIX).unwrap_or(&m.name).to_string())
        .collect();
    models.sort_unstable_by(|a, b| b.cmp(a));
    models
}
