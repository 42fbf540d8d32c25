//! Axum route handlers for stateless rendering and the template list.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::render::{pdf_filename, render_markup};
use crate::state::AppState;
use crate::templates::{resolve_style, TemplateId};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub name: &'static str,
    pub primary_color: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateSummary>> {
    Json(
        TemplateId::ALL
            .into_iter()
            .map(|id| TemplateSummary {
                id,
                name: id.display_name(),
                primary_color: resolve_style(id).primary_color.to_hex(),
            })
            .collect(),
    )
}

/// POST /api/v1/render/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(doc): Json<ResumeDocument>,
) -> Result<Html<String>, AppError> {
    doc.validate(&state.limits)?;
    Ok(Html(render_markup(&doc)))
}

/// POST /api/v1/render/pdf
///
/// Returns the PDF as a download named after the résumé owner.
pub async fn handle_pdf(
    State(state): State<AppState>,
    Json(doc): Json<ResumeDocument>,
) -> Result<Response, AppError> {
    doc.validate(&state.limits)?;
    pdf_attachment(&state, doc).await
}

/// Renders `doc` off the async runtime and wraps it as an attachment response.
pub(crate) async fn pdf_attachment(state: &AppState, doc: ResumeDocument) -> Result<Response, AppError> {
    let renderer = state.pdf.clone();
    let filename = pdf_filename(&doc.name);

    // Layout and serialization are CPU-bound.
    let bytes = tokio::task::spawn_blocking(move || {
        let style = resolve_style(doc.template);
        renderer.render(&doc, &style)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}

/// `attachment` disposition with an ASCII `filename` and an RFC 5987 `filename*` for
/// names outside ASCII.
fn content_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '_' })
        .collect();
    if ascii == filename {
        return format!("attachment; filename=\"{filename}\"");
    }
    let encoded: String = filename
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'-' => (b as char).to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect();
    format!("attachment; filename=\"{ascii}\"; filename*=UTF-8''{encoded}")
}
