//! Tone and purpose vocabularies for enhancement prompts.
//!
//! Both are closed sets so the prompts stay deterministic. The serialized form is the
//! snake_case identifier; `phrase()` is what gets spliced into the prompt.

use serde::{Deserialize, Serialize};

/// Voice of a generated summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Confident,
    Friendly,
    Executive,
}

impl Tone {
    pub fn phrase(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Confident => "confident",
            Tone::Friendly => "friendly",
            Tone::Executive => "executive",
        }
    }
}

/// What kind of document the improved text is destined for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    #[default]
    Resume,
    CoverLetter,
    LinkedinProfile,
}

impl Purpose {
    pub fn phrase(self) -> &'static str {
        match self {
            Purpose::Resume => "resume",
            Purpose::CoverLetter => "cover letter",
            Purpose::LinkedinProfile => "linkedin profile",
        }
    }
}
