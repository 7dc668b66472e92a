use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::recommendation::parser::ParseError;

/// Application-level error type.
/// The `Display` text is what the student sees, inline on the page or in the
/// JSON error body. Implements `IntoResponse` for the JSON routes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("The API key is not configured. Set GOOGLE_API_KEY and restart the service.")]
    MissingCredential,

    #[error("Please fill in every field (missing: {})", .0.join(", "))]
    MissingField(Vec<&'static str>),

    #[error("An error occurred: {0}")]
    Generation(#[from] LlmError),

    #[error("An error occurred: {0}")]
    Parse(#[from] ParseError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    /// Machine-readable code used in JSON bodies and page markup.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingCredential => "MISSING_CREDENTIAL",
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidBody(_) => "INVALID_BODY",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) | AppError::Parse(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string()
            }
        }));

        (self.status(), body).into_response()
    }
}
