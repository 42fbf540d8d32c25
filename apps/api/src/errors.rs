use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::ServiceError;
use crate::models::resume::ValidationError;
use crate::render::RenderError;
use crate::session::SessionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Text service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Service(e) => AppError::Service(e),
            SessionError::Validation(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Service(e) => {
                tracing::error!("Text service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SERVICE_ERROR",
                    "AI service unavailable, please retry".to_string(),
                )
            }
            AppError::Render(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "RENDER_ERROR",
                format!("{e}; fix your input and try again"),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Service(ServiceError::Timeout(Duration::from_secs(60))),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Render(RenderError::UnsupportedCharacter {
                    character: '📧',
                    field: "email",
                }),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Internal(anyhow::anyhow!("join failed")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_session_error_maps_to_matching_variant() {
        let err: AppError = SessionError::Validation(ValidationError::MissingName).into();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "name is required"));

        let err: AppError = SessionError::Service(ServiceError::EmptyContent).into();
        assert!(matches!(err, AppError::Service(ServiceError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_render_error_body_names_the_field() {
        let response = AppError::Render(RenderError::UnsupportedCharacter {
            character: '📧',
            field: "email",
        })
        .into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "RENDER_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("email"));
    }
}
