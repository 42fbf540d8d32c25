pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhance::handlers as assist;
use crate::render::handlers as render;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(render::handle_list_templates))
        // Stateless rendering
        .route("/api/v1/render/preview", post(render::handle_preview))
        .route("/api/v1/render/pdf", post(render::handle_pdf))
        // One-shot text assistance
        .route("/api/v1/assist/summary", post(assist::handle_summary))
        .route("/api/v1/assist/improve", post(assist::handle_improve))
        .route("/api/v1/assist/skills", post(assist::handle_skills))
        // Editing sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session)
                .put(sessions::handle_put_session)
                .delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/summary",
            post(sessions::handle_session_summary),
        )
        .route(
            "/api/v1/sessions/:id/skills",
            post(sessions::handle_session_skills),
        )
        .route(
            "/api/v1/sessions/:id/improve",
            post(sessions::handle_session_improve),
        )
        .route("/api/v1/sessions/:id/chat", post(sessions::handle_session_chat))
        .route(
            "/api/v1/sessions/:id/preview",
            get(sessions::handle_session_preview),
        )
        .route("/api/v1/sessions/:id/pdf", get(sessions::handle_session_pdf))
        .with_state(state)
}
