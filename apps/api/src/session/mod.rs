//! Session orchestration: explicit event handlers over an editable form snapshot.
//!
//! Each `on_*` handler takes the current `FormState` by reference and returns a new one
//! (or a validated `ResumeDocument` for submission). The `*_edit` functions underneath
//! return only the field the text service produced, as a `FormEdit`, so the HTTP layer
//! can apply it to whatever the form holds once the call completes. Handlers hold no
//! state of their own; the `SessionStore` owns the snapshots between requests.

pub mod handlers;
pub mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::enhance::{self, Purpose, Tone};
use crate::llm_client::{ServiceError, TextGenerator};
use crate::models::resume::{FormLimits, ResumeDocument, ValidationError};

pub use store::{Session, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Everything the form currently holds, plus the career-advice chat transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(flatten)]
    pub document: ResumeDocument,
    #[serde(default)]
    pub chat: Vec<ChatMessage>,
}

/// Which field an improvement request rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum ImproveTarget {
    Summary,
    JobDescription { index: usize },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Transcript length kept per session; older turns are dropped first.
pub const MAX_CHAT_MESSAGES: usize = 100;

/// One AI-produced change. Applying it writes a single field and nothing else, so
/// edits made while the text service was working survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Summary(String),
    Skills(String),
    JobDescription { index: usize, text: String },
    ChatTurn { question: String, answer: String },
}

impl FormEdit {
    pub fn apply(self, form: &mut FormState) -> Result<(), ValidationError> {
        match self {
            FormEdit::Summary(text) => form.document.summary = text,
            FormEdit::Skills(text) => form.document.skills = text,
            FormEdit::JobDescription { index, text } => {
                let len = form.document.jobs.len();
                let job = form
                    .document
                    .jobs
                    .get_mut(index)
                    .ok_or(ValidationError::NoSuchJob { index, len })?;
                job.description = text;
            }
            FormEdit::ChatTurn { question, answer } => {
                form.chat.push(ChatMessage {
                    role: ChatRole::User,
                    content: question,
                });
                form.chat.push(ChatMessage {
                    role: ChatRole::Assistant,
                    content: answer,
                });
                let excess = form.chat.len().saturating_sub(MAX_CHAT_MESSAGES);
                form.chat.drain(..excess);
            }
        }
        Ok(())
    }
}

/// Generates a summary from the job descriptions.
///
/// With no jobs there is nothing to summarize: no edit is produced and the text
/// service is not called.
pub async fn summary_edit(
    state: &FormState,
    generator: &dyn TextGenerator,
    tone: Tone,
) -> Result<Option<FormEdit>, ServiceError> {
    if state.document.jobs.is_empty() {
        info!("No positions to summarize; summary left unchanged");
        return Ok(None);
    }
    let summary =
        enhance::generate_summary(generator, &state.document.experience_text(), tone).await?;
    Ok(Some(FormEdit::Summary(summary)))
}

/// Suggests skills from the job descriptions (empty text when there are none).
pub async fn skills_edit(
    state: &FormState,
    generator: &dyn TextGenerator,
) -> Result<FormEdit, ServiceError> {
    let skills = enhance::suggest_skills(generator, &state.document.experience_text()).await?;
    Ok(FormEdit::Skills(skills))
}

/// Rewrites one field with `improve_text`. An unknown job index fails before any call.
pub async fn improve_edit(
    state: &FormState,
    generator: &dyn TextGenerator,
    target: ImproveTarget,
    purpose: Purpose,
) -> Result<FormEdit, SessionError> {
    match target {
        ImproveTarget::Summary => {
            let text = enhance::improve_text(generator, &state.document.summary, purpose).await?;
            Ok(FormEdit::Summary(text))
        }
        ImproveTarget::JobDescription { index } => {
            let job = state.document.jobs.get(index).ok_or(ValidationError::NoSuchJob {
                index,
                len: state.document.jobs.len(),
            })?;
            let text = enhance::improve_text(generator, &job.description, purpose).await?;
            Ok(FormEdit::JobDescription { index, text })
        }
    }
}

/// Asks a career-advice question; the edit appends both turns.
pub async fn chat_edit(generator: &dyn TextGenerator, message: &str) -> Result<FormEdit, ServiceError> {
    let answer = enhance::ask_career_advice(generator, message).await?;
    Ok(FormEdit::ChatTurn {
        question: message.to_string(),
        answer,
    })
}

fn applied(state: &FormState, edit: Option<FormEdit>) -> Result<FormState, SessionError> {
    let mut next = state.clone();
    if let Some(edit) = edit {
        edit.apply(&mut next)?;
    }
    Ok(next)
}

/// Replaces the summary with one generated from the job descriptions. Without jobs
/// the state comes back unchanged.
pub async fn on_generate_summary(
    state: &FormState,
    generator: &dyn TextGenerator,
    tone: Tone,
) -> Result<FormState, SessionError> {
    let edit = summary_edit(state, generator, tone).await?;
    applied(state, edit)
}

/// Replaces the skills with suggestions derived from the job descriptions.
pub async fn on_suggest_skills(
    state: &FormState,
    generator: &dyn TextGenerator,
) -> Result<FormState, SessionError> {
    let edit = skills_edit(state, generator).await?;
    applied(state, Some(edit))
}

/// Rewrites one field with `improve_text`. The old text is replaced, never merged.
pub async fn on_improve(
    state: &FormState,
    generator: &dyn TextGenerator,
    target: ImproveTarget,
    purpose: Purpose,
) -> Result<FormState, SessionError> {
    let edit = improve_edit(state, generator, target, purpose).await?;
    applied(state, Some(edit))
}

/// Asks a career-advice question and appends both turns to the transcript.
pub async fn on_chat(
    state: &FormState,
    generator: &dyn TextGenerator,
    message: &str,
) -> Result<FormState, SessionError> {
    let edit = chat_edit(generator, message).await?;
    applied(state, Some(edit))
}

/// Freezes the form into a validated document ready for rendering.
pub fn on_submit(state: &FormState, limits: &FormLimits) -> Result<ResumeDocument, ValidationError> {
    state.document.validate(limits)?;
    Ok(state.document.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubGenerator;
    use crate::models::resume::JobEntry;

    fn form_with_jobs(descriptions: &[&str]) -> FormState {
        FormState {
            document: ResumeDocument {
                name: "Jane Doe".to_string(),
                summary: "old summary".to_string(),
                skills: "old skills".to_string(),
                jobs: descriptions
                    .iter()
                    .map(|d| JobEntry {
                        company: "Acme".to_string(),
                        role: "Engineer".to_string(),
                        description: d.to_string(),
                    })
                    .collect(),
                ..Default::default()
            },
            chat: vec![],
        }
    }

    #[tokio::test]
    async fn test_generate_summary_replaces_summary() {
        let stub = StubGenerator::replying("Stub summary.");
        let state = form_with_jobs(&["Built 3 products", "led team of 5"]);
        let next = on_generate_summary(&state, &stub, Tone::Professional)
            .await
            .unwrap();
        assert_eq!(next.document.summary, "Stub summary.");
        assert_eq!(state.document.summary, "old summary", "input is not mutated");
        assert!(stub.prompts()[0].contains("Built 3 products\nled team of 5"));
    }

    #[tokio::test]
    async fn test_generate_summary_without_jobs_skips_service() {
        let stub = StubGenerator::replying("unused");
        let state = form_with_jobs(&[]);
        let next = on_generate_summary(&state, &stub, Tone::Professional)
            .await
            .unwrap();
        assert_eq!(next, state);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_suggest_skills_replaces_skills() {
        let stub = StubGenerator::replying("Rust, Go");
        let next = on_suggest_skills(&form_with_jobs(&["Built APIs"]), &stub)
            .await
            .unwrap();
        assert_eq!(next.document.skills, "Rust, Go");
    }

    #[tokio::test]
    async fn test_suggest_skills_without_jobs_still_asks() {
        let stub = StubGenerator::replying("Communication");
        let next = on_suggest_skills(&form_with_jobs(&[]), &stub).await.unwrap();
        assert_eq!(next.document.skills, "Communication");
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_improve_job_description() {
        let stub = StubGenerator::replying("Shipped 3 products to 1M users.");
        let next = on_improve(
            &form_with_jobs(&["a", "built stuff"]),
            &stub,
            ImproveTarget::JobDescription { index: 1 },
            Purpose::Resume,
        )
        .await
        .unwrap();
        assert_eq!(next.document.jobs[0].description, "a");
        assert_eq!(next.document.jobs[1].description, "Shipped 3 products to 1M users.");
        assert!(stub.prompts()[0].ends_with("built stuff"));
    }

    #[tokio::test]
    async fn test_improve_out_of_range_is_validation_error() {
        let stub = StubGenerator::replying("unused");
        let err = on_improve(
            &form_with_jobs(&["a"]),
            &stub,
            ImproveTarget::JobDescription { index: 3 },
            Purpose::Resume,
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::NoSuchJob { index: 3, len: 1 })
        ));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_improve_summary_service_error_propagates() {
        let stub = StubGenerator::failing(500, "boom");
        let err = on_improve(
            &form_with_jobs(&[]),
            &stub,
            ImproveTarget::Summary,
            Purpose::Resume,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SessionError::Service(ServiceError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_chat_appends_both_turns() {
        let stub = StubGenerator::replying("Quantify your impact.");
        let next = on_chat(&FormState::default(), &stub, "Any tips?").await.unwrap();
        assert_eq!(
            next.chat,
            vec![
                ChatMessage {
                    role: ChatRole::User,
                    content: "Any tips?".to_string()
                },
                ChatMessage {
                    role: ChatRole::Assistant,
                    content: "Quantify your impact.".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_chat_service_error_propagates() {
        let stub = StubGenerator::failing(401, "bad key");
        let err = on_chat(&FormState::default(), &stub, "hello").await.unwrap_err();
        assert!(matches!(err, SessionError::Service(ServiceError::Api { status: 401, .. })));
    }

    #[test]
    fn test_chat_transcript_is_capped() {
        let mut form = FormState::default();
        for i in 0..MAX_CHAT_MESSAGES {
            FormEdit::ChatTurn {
                question: format!("q{i}"),
                answer: format!("a{i}"),
            }
            .apply(&mut form)
            .unwrap();
        }
        assert_eq!(form.chat.len(), MAX_CHAT_MESSAGES);
        assert_eq!(form.chat.last().unwrap().content, format!("a{}", MAX_CHAT_MESSAGES - 1));
        assert_eq!(form.chat[0].content, format!("q{}", MAX_CHAT_MESSAGES / 2));
    }

    #[test]
    fn test_edit_touches_only_its_field() {
        let mut form = form_with_jobs(&["a", "b"]);
        form.document.name = "Edited While Waiting".to_string();
        let before = form.clone();
        FormEdit::JobDescription {
            index: 1,
            text: "rewritten".to_string(),
        }
        .apply(&mut form)
        .unwrap();
        assert_eq!(form.document.jobs[1].description, "rewritten");
        form.document.jobs[1].description = "b".to_string();
        assert_eq!(form, before);
    }

    #[test]
    fn test_job_edit_fails_when_job_was_removed() {
        let mut form = form_with_jobs(&[]);
        let err = FormEdit::JobDescription {
            index: 0,
            text: "late".to_string(),
        }
        .apply(&mut form)
        .unwrap_err();
        assert_eq!(err, ValidationError::NoSuchJob { index: 0, len: 0 });
    }

    #[test]
    fn test_submit_validates_job_limit() {
        let state = form_with_jobs(&["1", "2", "3"]);
        let limits = FormLimits {
            max_jobs: 2,
            require_name: false,
        };
        assert_eq!(
            on_submit(&state, &limits),
            Err(ValidationError::TooManyJobs { max: 2, actual: 3 })
        );
        assert_eq!(
            on_submit(&state, &FormLimits::default()).unwrap(),
            state.document
        );
    }

    #[test]
    fn test_form_state_json_is_flat() {
        let json = serde_json::to_value(form_with_jobs(&["x"])).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["template"], "Clean Green");
        assert!(json["chat"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_improve_target_json_shape() {
        let target: ImproveTarget =
            serde_json::from_str(r#"{"field": "job_description", "index": 2}"#).unwrap();
        assert_eq!(target, ImproveTarget::JobDescription { index: 2 });
        let target: ImproveTarget = serde_json::from_str(r#"{"field": "summary"}"#).unwrap();
        assert_eq!(target, ImproveTarget::Summary);
    }
}
