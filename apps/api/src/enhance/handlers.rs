//! Axum route handlers for one-shot text assistance outside a session.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhance::{self, Purpose, Tone};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub experience: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub text: String,
    #[serde(default)]
    pub purpose: Purpose,
}

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

/// POST /api/v1/assist/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let text = enhance::generate_summary(state.llm.as_ref(), &request.experience, request.tone).await?;
    Ok(Json(TextResponse { text }))
}

/// POST /api/v1/assist/improve
pub async fn handle_improve(
    State(state): State<AppState>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let text = enhance::improve_text(state.llm.as_ref(), &request.text, request.purpose).await?;
    Ok(Json(TextResponse { text }))
}

/// POST /api/v1/assist/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let text = enhance::suggest_skills(state.llm.as_ref(), &request.job_description).await?;
    Ok(Json(TextResponse { text }))
}
