//! Live-preview renderer: a self-contained, inline-styled HTML fragment.
//!
//! Never fails. Empty fields render as empty regions; all user text is escaped and
//! embedded newlines become `<br>`.

use crate::models::resume::{JobEntry, ResumeDocument};
use crate::render::{assemble_sections, contact_line, SectionBody};
use crate::templates::{resolve_style, StyleDescriptor};

/// Renders the preview using the style of `doc.template`.
pub fn render_markup(doc: &ResumeDocument) -> String {
    render_markup_with_style(doc, &resolve_style(doc.template))
}

pub fn render_markup_with_style(doc: &ResumeDocument, style: &StyleDescriptor) -> String {
    let accent = style.primary_color.to_hex();
    let heading_text = style.heading_text_color.to_hex();
    let mut html = String::new();

    html.push_str(&format!(
        "<div class=\"resume-preview\" style=\"border: 2px solid {accent}; border-radius: 15px; \
         padding: 25px; background: white; box-shadow: 0 4px 20px rgba(0,0,0,0.1); \
         font-family: {font};\">\n",
        font = style.font.css_stack(),
    ));
    html.push_str(&format!(
        "  <h2 style=\"background: {accent}; color: {heading_text}; margin-top: 0; \
         padding: 10px; border-radius: 8px;\">{}</h2>\n",
        escape_html(&doc.name)
    ));
    html.push_str(&format!(
        "  <p style=\"color: #555;\">{}</p>\n",
        escape_html(&contact_line(doc))
    ));

    for section in assemble_sections(doc) {
        html.push_str(&format!(
            "  <h3 style=\"color: {accent}; border-bottom: 1px solid #eee; padding-bottom: 5px;\">{}</h3>\n",
            section.kind.title()
        ));
        match section.body {
            SectionBody::Text(text) => {
                html.push_str(&format!("  <p>{}</p>\n", escape_multiline(text)));
            }
            SectionBody::Jobs(jobs) => {
                for job in jobs {
                    html.push_str(&render_job(job));
                }
            }
        }
    }

    html.push_str("</div>\n");
    html
}

fn render_job(job: &JobEntry) -> String {
    format!(
        "  <p style=\"margin-bottom: 15px;\"><b style=\"color: #333;\">{}</b><br>\
         <span style=\"color: #555;\">- {}</span></p>\n",
        escape_html(&job.headline()),
        escape_multiline(&job.description)
    )
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn escape_multiline(s: &str) -> String {
    escape_html(s).replace("\r\n", "\n").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeDocument;
    use crate::render::fixtures::jane_doe;
    use crate::templates::{Rgb, TemplateId};

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| html.find(n).unwrap_or_else(|| panic!("missing {n}")))
            .collect()
    }

    #[test]
    fn test_modern_blue_uses_steel_blue_headings() {
        let html = render_markup(&jane_doe());
        assert!(html.contains("<h2 style=\"background: #4682b4;"));
        assert!(html.contains("<h3 style=\"color: #4682b4;"));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let html = render_markup(&jane_doe());
        let order = positions(
            &html,
            &[
                "Jane Doe",
                "jane@x.com | 555-1234",
                "PROFESSIONAL SUMMARY",
                "Experienced engineer.",
                "WORK EXPERIENCE",
                "Engineer at Acme",
                "- Built things.",
                "EDUCATION",
                "BS CS, State U",
                "SKILLS",
                "Go, Python",
            ],
        );
        assert!(order.windows(2).all(|w| w[0] < w[1]), "order: {order:?}");
    }

    #[test]
    fn test_every_template_colors_every_heading() {
        for id in TemplateId::ALL {
            let doc = ResumeDocument {
                template: id,
                ..jane_doe()
            };
            let accent = resolve_style(id).primary_color.to_hex();
            let html = render_markup(&doc);
            assert_eq!(html.matches(&format!("color: {accent};")).count(), 4);
        }
    }

    #[test]
    fn test_empty_document_renders_without_panicking() {
        let html = render_markup(&ResumeDocument::default());
        assert!(html.contains("WORK EXPERIENCE"));
        assert!(html.contains("<p style=\"color: #555;\"> | </p>"));
        // Unknown/default template is Clean Green.
        assert!(html.contains(&Rgb(46, 139, 87).to_hex()));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let doc = ResumeDocument {
            name: "<script>alert('x')</script>".to_string(),
            ..Default::default()
        };
        let html = render_markup(&doc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_multiline_description_uses_line_breaks() {
        let mut doc = jane_doe();
        doc.jobs[0].description = "Built things.\nShipped more.".to_string();
        assert!(render_markup(&doc).contains("- Built things.<br>Shipped more."));
    }

    #[test]
    fn test_each_job_is_its_own_paragraph() {
        let mut doc = jane_doe();
        doc.jobs.push(doc.jobs[0].clone());
        let html = render_markup(&doc);
        assert_eq!(html.matches("<p style=\"margin-bottom: 15px;\">").count(), 2);
    }
}
