//! Axum route handlers for the JSON Recommendation API.
//!
//! Stateless counterparts of the browser flow: nothing here touches sessions.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{resolve_catalog, ModelCatalog};
use crate::errors::AppError;
use crate::recommendation::generator::recommend_majors;
use crate::recommendation::models::{FormInput, RecommendationSet};
use crate::render::transcript::build_transcript;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(flatten)]
    pub form: FormInput,
    /// Must be a catalog entry; anything else falls back to the first entry.
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub model: String,
    pub recommendations: RecommendationSet,
    pub transcript: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/models
pub async fn handle_list_models(State(state): State<AppState>) -> Json<ModelCatalog> {
    Json(resolve_catalog(state.llm.as_ref(), state.api_key()).await)
}

/// POST /api/v1/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationsRequest>, JsonRejection>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let Json(request) = payload?;
    let catalog = resolve_catalog(state.llm.as_ref(), state.api_key()).await;
    let model = catalog.select(request.model.as_deref()).to_string();

    let recommendations =
        recommend_majors(state.llm.as_ref(), state.api_key(), &model, &request.form).await?;
    let transcript = build_transcript(&recommendations);

    Ok(Json(RecommendationsResponse {
        model,
        recommendations,
        transcript,
    }))
}
