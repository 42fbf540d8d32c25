//! Text Enhancement: summary generation, content improvement, skill suggestion,
//! and free-form career advice.
//!
//! Every operation builds one prompt and makes exactly one `TextGenerator` call.
//! No retries, no caching, no post-processing: the generated text is returned as-is
//! and a `ServiceError` propagates unchanged.

pub mod handlers;
pub mod prompts;
pub mod tone;

use tracing::info;

use crate::enhance::prompts::{
    IMPROVE_PROMPT_TEMPLATE, SKILLS_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE,
};
use crate::llm_client::{ServiceError, TextGenerator};

pub use tone::{Purpose, Tone};

/// Generates a short résumé summary from free-text experience.
pub async fn generate_summary(
    generator: &dyn TextGenerator,
    experience: &str,
    tone: Tone,
) -> Result<String, ServiceError> {
    info!(tone = tone.phrase(), "Generating resume summary");
    generator.generate(&build_summary_prompt(experience, tone)).await
}

/// Rewrites `text` to be more impactful for the given purpose.
pub async fn improve_text(
    generator: &dyn TextGenerator,
    text: &str,
    purpose: Purpose,
) -> Result<String, ServiceError> {
    info!(purpose = purpose.phrase(), "Improving content");
    generator.generate(&build_improve_prompt(text, purpose)).await
}

/// Suggests skills for a job description. The reply is free text (nominally comma-separated).
pub async fn suggest_skills(
    generator: &dyn TextGenerator,
    job_description: &str,
) -> Result<String, ServiceError> {
    info!("Suggesting skills");
    generator.generate(&build_skills_prompt(job_description)).await
}

/// Forwards a career-advice question verbatim.
pub async fn ask_career_advice(
    generator: &dyn TextGenerator,
    question: &str,
) -> Result<String, ServiceError> {
    info!("Answering career-advice question");
    generator.generate(question).await
}

pub(crate) fn build_summary_prompt(experience: &str, tone: Tone) -> String {
    SUMMARY_PROMPT_TEMPLATE
        .replace("{tone}", tone.phrase())
        .replace("{experience}", experience)
}

pub(crate) fn build_improve_prompt(text: &str, purpose: Purpose) -> String {
    IMPROVE_PROMPT_TEMPLATE
        .replace("{purpose}", purpose.phrase())
        .replace("{text}", text)
}

pub(crate) fn build_skills_prompt(job_description: &str) -> String {
    SKILLS_PROMPT_TEMPLATE.replace("{job_description}", job_description)
}
