pub mod health;
pub mod web;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser pages
        .route("/", get(web::handle_index))
        .route("/recommend", post(web::handle_recommend))
        .route("/transcript", get(web::handle_transcript))
        // JSON API
        .route("/api/v1/models", get(handlers::handle_list_models))
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommendations),
        )
        .with_state(state)
}
