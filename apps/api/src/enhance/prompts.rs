// Prompt templates for the enhancement adapter.
// Placeholders are replaced with `str::replace` before sending.

/// Replace: {tone}, {experience}
pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
Create a {tone} 3-sentence professional summary for a resume based on:
{experience}";

/// Replace: {purpose}, {text}
pub const IMPROVE_PROMPT_TEMPLATE: &str = "\
Improve this {purpose} content to be more impactful and ATS-friendly:
{text}";

/// Replace: {job_description}
pub const SKILLS_PROMPT_TEMPLATE: &str = "\
Suggest 10 relevant hard and soft skills for a resume based on:
{job_description}
Return as a comma-separated list.";
