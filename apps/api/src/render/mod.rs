//! Rendering engine: HTML preview and PDF export of a `ResumeDocument`.
//!
//! Both renderers walk the same `assemble_sections` output, so section order,
//! titles, and job formatting cannot drift between preview and export:
//!
//! 1. name heading (primary color)
//! 2. contact line `email | phone`
//! 3. PROFESSIONAL SUMMARY
//! 4. WORK EXPERIENCE (`{role} at {company}` / `- {description}` per job)
//! 5. EDUCATION
//! 6. SKILLS

pub mod encoding;
pub mod handlers;
pub mod html;
pub mod pdf;

use thiserror::Error;

use crate::models::resume::{JobEntry, ResumeDocument};

pub use encoding::GlyphPolicy;
pub use html::render_markup;
pub use pdf::{pdf_filename, render_document, PdfRenderer};

/// Content could not be encoded or laid out in the target format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("character {character:?} in {field} cannot be encoded in the PDF font")]
    UnsupportedCharacter { character: char, field: &'static str },
}

/// The four titled sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Summary => "PROFESSIONAL SUMMARY",
            SectionKind::Experience => "WORK EXPERIENCE",
            SectionKind::Education => "EDUCATION",
            SectionKind::Skills => "SKILLS",
        }
    }

    /// Name of the document field the section is built from, used in error reports.
    pub fn field(self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "jobs",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody<'a> {
    Text(&'a str),
    Jobs(&'a [JobEntry]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub body: SectionBody<'a>,
}

/// The four titled sections of `doc` in their fixed order.
pub fn assemble_sections(doc: &ResumeDocument) -> [Section<'_>; 4] {
    [
        Section {
            kind: SectionKind::Summary,
            body: SectionBody::Text(&doc.summary),
        },
        Section {
            kind: SectionKind::Experience,
            body: SectionBody::Jobs(&doc.jobs),
        },
        Section {
            kind: SectionKind::Education,
            body: SectionBody::Text(&doc.education),
        },
        Section {
            kind: SectionKind::Skills,
            body: SectionBody::Text(&doc.skills),
        },
    ]
}

/// `"{email} | {phone}"`.
pub fn contact_line(doc: &ResumeDocument) -> String {
    format!("{} | {}", doc.email, doc.phone)
}

/// One job as plain text: headline, then the description prefixed with `- `.
pub fn job_text(job: &JobEntry) -> String {
    format!("{}\n- {}", job.headline(), job.description)
}

/// Plain-text body of a section. Jobs are joined with a newline.
pub fn section_text(body: SectionBody<'_>) -> String {
    match body {
        SectionBody::Text(text) => text.to_string(),
        SectionBody::Jobs(jobs) => jobs.iter().map(job_text).collect::<Vec<_>>().join("\n"),
    }
}
