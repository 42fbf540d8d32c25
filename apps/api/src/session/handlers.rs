//! Axum route handlers for editing sessions.
//!
//! Each AI action reads the session's form, awaits the text service without holding a
//! lock, then applies only the field it produced to whatever the form holds by then.
//! A failed call leaves the session as it was.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Response},
    Json,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::enhance::{Purpose, Tone};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::render::handlers::pdf_attachment;
use crate::render::render_markup;
use crate::session::{self, FormEdit, FormState, ImproveTarget, Session};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub target: ImproveTarget,
    #[serde(default)]
    pub purpose: Purpose,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// The body is optional; without one the session starts from an empty form.
pub async fn handle_create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let document: ResumeDocument = optional_json(&body)?;
    let session = state
        .sessions
        .create(FormState {
            document,
            chat: Vec::new(),
        })
        .await;
    let active = state.sessions.len().await;
    tracing::info!(session_id = %session.session_id, active, "Created session");
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<FormState>, AppError> {
    Ok(Json(load(&state, session_id).await?.form))
}

/// PUT /api/v1/sessions/:id
///
/// Replaces every form field. The chat transcript is kept.
pub async fn handle_put_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(document): Json<ResumeDocument>,
) -> Result<Json<FormState>, AppError> {
    let session = state
        .sessions
        .replace_document(session_id, document)
        .await
        .ok_or_else(|| not_found(session_id))?;
    Ok(Json(session.form))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .remove(session_id)
        .await
        .ok_or_else(|| not_found(session_id))?;
    tracing::info!(session_id = %session_id, "Deleted session");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/summary
///
/// The body (`{"tone": ...}`) is optional.
pub async fn handle_session_summary(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<FormState>, AppError> {
    let request: SummaryRequest = optional_json(&body)?;
    let current = load(&state, session_id).await?;
    match session::summary_edit(&current.form, state.llm.as_ref(), request.tone).await? {
        Some(edit) => commit(&state, session_id, edit).await,
        None => Ok(Json(current.form)),
    }
}

/// POST /api/v1/sessions/:id/skills
pub async fn handle_session_skills(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<FormState>, AppError> {
    let current = load(&state, session_id).await?;
    let edit = session::skills_edit(&current.form, state.llm.as_ref()).await?;
    commit(&state, session_id, edit).await
}

/// POST /api/v1/sessions/:id/improve
pub async fn handle_session_improve(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<FormState>, AppError> {
    let current = load(&state, session_id).await?;
    let edit = session::improve_edit(
        &current.form,
        state.llm.as_ref(),
        request.target,
        request.purpose,
    )
    .await?;
    commit(&state, session_id, edit).await
}

/// POST /api/v1/sessions/:id/chat
pub async fn handle_session_chat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<FormState>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    load(&state, session_id).await?;
    let edit = session::chat_edit(state.llm.as_ref(), &request.message).await?;
    commit(&state, session_id, edit).await
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_session_preview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let current = load(&state, session_id).await?;
    let doc = session::on_submit(&current.form, &state.limits)?;
    Ok(Html(render_markup(&doc)))
}

/// GET /api/v1/sessions/:id/pdf
pub async fn handle_session_pdf(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let current = load(&state, session_id).await?;
    let doc = session::on_submit(&current.form, &state.limits)?;
    pdf_attachment(&state, doc).await
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn not_found(session_id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {session_id} not found"))
}

async fn load(state: &AppState, session_id: Uuid) -> Result<Session, AppError> {
    state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| not_found(session_id))
}

/// Applies `edit` to the session's current form.
async fn commit(state: &AppState, session_id: Uuid, edit: FormEdit) -> Result<Json<FormState>, AppError> {
    let session = state
        .sessions
        .update(session_id, |form| edit.apply(form))
        .await
        .ok_or_else(|| not_found(session_id))??;
    Ok(Json(session.form))
}

/// Parses an optional JSON body. An empty body means the defaults; anything else
/// must parse.
fn optional_json<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::Validation(format!("invalid request body: {e}")))
}
