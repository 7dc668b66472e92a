//! Browser-facing handlers: the page, the form submission, the transcript download.
//!
//! Every render re-resolves the model catalog and re-derives the results from
//! the session slot. A submission writes the slot only when parsing succeeded.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::{resolve_catalog, ModelCatalog};
use crate::errors::AppError;
use crate::recommendation::generator::recommend_majors;
use crate::recommendation::models::FormInput;
use crate::render::page::{render_page, Notice, PageView};
use crate::render::transcript::{build_transcript, TRANSCRIPT_FILENAME};
use crate::session::{session_cookie, session_id_from_headers, StoredResult};
use crate::state::AppState;

/// The urlencoded form posted by the page.
#[derive(Debug, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub hobby: String,
    #[serde(default)]
    pub subject: String,
    pub model: Option<String>,
}

impl SubmissionForm {
    fn split(self) -> (FormInput, Option<String>) {
        (
            FormInput {
                job: self.job,
                interest: self.interest,
                hobby: self.hobby,
                subject: self.subject,
            },
            self.model,
        )
    }
}

/// Existing session id, or a fresh one that must be sent back as a cookie.
fn session_for(headers: &HeaderMap) -> (Uuid, bool) {
    match session_id_from_headers(headers) {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    }
}

fn with_session(id: Uuid, is_new: bool, body: impl IntoResponse) -> Response {
    if is_new {
        ([(header::SET_COOKIE, session_cookie(id))], body).into_response()
    } else {
        body.into_response()
    }
}

async fn render_for_session(
    state: &AppState,
    catalog: &ModelCatalog,
    session_id: Uuid,
    form: &FormInput,
    notice: Option<Notice>,
) -> Html<String> {
    let slot = state.sessions.get(session_id).await;
    let selected_model = catalog.select(slot.selected_model.as_deref());

    Html(render_page(&PageView {
        catalog,
        selected_model,
        has_credential: state.api_key().is_some(),
        form,
        notice,
        result: slot.result.as_ref(),
    }))
}

/// GET /
pub async fn handle_index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session_id, is_new) = session_for(&headers);
    let catalog = resolve_catalog(state.llm.as_ref(), state.api_key()).await;
    let page = render_for_session(&state, &catalog, session_id, &FormInput::default(), None).await;
    with_session(session_id, is_new, page)
}

/// POST /recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submission): Form<SubmissionForm>,
) -> Response {
    let (session_id, is_new) = session_for(&headers);
    let (form, requested_model) = submission.split();

    // Only catalog entries are ever sent to the provider.
    let catalog = resolve_catalog(state.llm.as_ref(), state.api_key()).await;
    let model = catalog.select(requested_model.as_deref()).to_string();
    state.sessions.remember_model(session_id, &model).await;

    let notice = match recommend_majors(state.llm.as_ref(), state.api_key(), &model, &form).await
    {
        Ok(recommendations) => {
            state
                .sessions
                .store_result(
                    session_id,
                    StoredResult {
                        recommendations,
                        model,
                        generated_at: Utc::now(),
                    },
                )
                .await;
            None
        }
        Err(e) => Some(Notice::from(&e)),
    };

    let page = render_for_session(&state, &catalog, session_id, &form, notice).await;
    with_session(session_id, is_new, page)
}

/// GET /transcript
pub async fn handle_transcript(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let result = match session_id_from_headers(&headers) {
        Some(id) => state.sessions.get(id).await.result,
        None => None,
    };
    let result =
        result.ok_or_else(|| AppError::NotFound("No recommendations to download yet".to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{TRANSCRIPT_FILENAME}\""),
            ),
        ],
        build_transcript(&result.recommendations),
    )
        .into_response())
}
