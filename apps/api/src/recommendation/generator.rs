//! Recommendation pipeline.
//!
//! Flow: credential check → field check → build prompts → one LLM call →
//!       eager parse → return the set.
//!
//! Validation happens before any provider call; nothing is retried.

use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::{GenerationRequest, LlmProvider};
use crate::recommendation::models::{FormInput, RecommendationSet};
use crate::recommendation::parser::parse_recommendations;
use crate::recommendation::prompts::build_prompts;

/// Runs one submission end to end. The caller decides where a successful set is stored.
pub async fn recommend_majors(
    llm: &dyn LlmProvider,
    api_key: Option<&str>,
    model: &str,
    form: &FormInput,
) -> Result<RecommendationSet, AppError> {
    let api_key = api_key.ok_or(AppError::MissingCredential)?;

    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::MissingField(missing));
    }

    let prompts = build_prompts(form);

    info!("Requesting recommendations from {model}");
    let raw = llm
        .generate(
            api_key,
            GenerationRequest {
                model,
                system: &prompts.system,
                prompt: &prompts.user,
            },
        )
        .await
        .map_err(|e| {
            error!("Generation failed on {model}: {e}");
            AppError::Generation(e)
        })?;

    let recommendations = parse_recommendations(&raw).map_err(|e| {
        error!("Could not parse response from {model}: {e}");
        AppError::Parse(e)
    })?;

    info!(
        "Received {} recommendations from {model}",
        recommendations.len()
    );
    Ok(recommendations)
}
