use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::models::resume::FormLimits;
use crate::render::PdfRenderer;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text Enhancement Service. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub sessions: SessionStore,
    pub pdf: PdfRenderer,
    pub limits: FormLimits,
}

impl AppState {
    pub fn new(llm: Arc<dyn TextGenerator>, config: &Config) -> Self {
        Self {
            llm,
            sessions: SessionStore::new(config.session_ttl),
            pdf: PdfRenderer::new(config.glyph_policy),
            limits: config.form_limits(),
        }
    }
}
