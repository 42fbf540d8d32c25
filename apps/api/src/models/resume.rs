//! Résumé data model: the immutable snapshot both renderers consume.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::templates::TemplateId;

/// Upper bound on work-experience entries when no limit is configured.
pub const DEFAULT_MAX_JOBS: usize = 5;

/// One work-experience entry. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobEntry {
    pub company: String,
    pub role: String,
    pub description: String,
}

impl JobEntry {
    /// `"{role} at {company}"`, the entry's heading line in both renderers.
    pub fn headline(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }
}

/// A complete résumé, built fresh for every render.
///
/// Contact fields are free text; `skills` is an opaque comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub jobs: Vec<JobEntry>,
    pub education: String,
    pub skills: String,
    pub template: TemplateId,
}

/// Limits applied when a document is accepted for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLimits {
    pub max_jobs: usize,
    /// When false (the default) an empty name is accepted silently.
    pub require_name: bool,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            max_jobs: DEFAULT_MAX_JOBS,
            require_name: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at most {max} positions are allowed, got {actual}")]
    TooManyJobs { max: usize, actual: usize },

    #[error("name is required")]
    MissingName,

    #[error("no position at index {index} (have {len})")]
    NoSuchJob { index: usize, len: usize },
}

impl ResumeDocument {
    /// Checks the document against `limits`. Everything else is permissive.
    pub fn validate(&self, limits: &FormLimits) -> Result<(), ValidationError> {
        if self.jobs.len() > limits.max_jobs {
            return Err(ValidationError::TooManyJobs {
                max: limits.max_jobs,
                actual: self.jobs.len(),
            });
        }
        if limits.require_name && self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(())
    }

    /// The experience text fed to summary and skill generation: descriptions, one per line.
    pub fn experience_text(&self) -> String {
        join_descriptions(&self.jobs)
    }
}

pub(crate) fn join_descriptions(jobs: &[JobEntry]) -> String {
    jobs.iter()
        .map(|job| job.description.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
