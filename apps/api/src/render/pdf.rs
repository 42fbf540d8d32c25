//! PDF export renderer.
//!
//! Two stages:
//! 1. `layout`: sanitize every field against WinAnsi, then flow the fixed section
//!    sequence through `FlowBuilder` into per-page draw operations.
//! 2. `write_pdf`: serialize those operations with `pdf-writer`, using the base-14
//!    Helvetica faces (no embedding).
//!
//! Output is deterministic: no creation dates, no random file IDs.

use std::borrow::Cow;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::info;

use crate::layout::{
    default_page_config, DrawOp, FlowBuilder, FontFace, FontFamily, PageConfig, PageLayout,
};
use crate::models::resume::ResumeDocument;
use crate::render::encoding::{encode_win_ansi, sanitize, GlyphPolicy};
use crate::render::{assemble_sections, contact_line, section_text, RenderError};
use crate::templates::{Rgb, StyleDescriptor};

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

/// Renders with the default page geometry and `GlyphPolicy::Reject`.
pub fn render_document(doc: &ResumeDocument, style: &StyleDescriptor) -> Result<Vec<u8>, RenderError> {
    PdfRenderer::default().render(doc, style)
}

/// Download filename for a résumé: `"{name}_Resume.pdf"`.
///
/// Characters that would break a path or a `Content-Disposition` header become `_`.
pub fn pdf_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '"' | ':' | '*' | '?' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{cleaned}_Resume.pdf")
    }
}

#[derive(Debug, Clone)]
pub struct PdfRenderer {
    pub page_config: PageConfig,
    pub glyph_policy: GlyphPolicy,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(GlyphPolicy::default())
    }
}

impl PdfRenderer {
    pub fn new(glyph_policy: GlyphPolicy) -> Self {
        Self {
            page_config: default_page_config(),
            glyph_policy,
        }
    }

    pub fn render(&self, doc: &ResumeDocument, style: &StyleDescriptor) -> Result<Vec<u8>, RenderError> {
        let pages = self.layout(doc, style)?;
        let bytes = self.write_pdf(&pages, &format!("{} Resume", doc.name), style.font);
        info!(
            pages = pages.len(),
            bytes = bytes.len(),
            template = style.name,
            "Rendered resume PDF"
        );
        Ok(bytes)
    }

    /// Flows the document into pages of draw operations.
    pub fn layout(&self, doc: &ResumeDocument, style: &StyleDescriptor) -> Result<Vec<PageLayout>, RenderError> {
        let config = &self.page_config;
        let name = self.clean(&doc.name, "name")?;
        let contact = contact_line(doc);
        let contact = self.clean(&contact, "contact")?;

        let mut flow = FlowBuilder::new(config, style.font);
        flow.filled_cell(
            &name,
            FontFace::Bold,
            config.name_size_pt,
            style.heading_text_color,
            style.primary_color,
        );
        flow.cell(&contact, FontFace::Regular, config.body_size_pt, Rgb::BLACK);

        for section in assemble_sections(doc) {
            let body = section_text(section.body);
            let body = self.clean(&body, section.kind.field())?;
            flow.cell(section.kind.title(), FontFace::Bold, config.title_size_pt, Rgb::BLACK);
            flow.multi_cell(
                &body,
                FontFace::Regular,
                config.body_size_pt,
                Rgb::BLACK,
                config.body_line_height_pt,
            );
            flow.gap(config.section_gap_pt);
        }

        Ok(flow.finish())
    }

    fn clean<'a>(&self, text: &'a str, field: &'static str) -> Result<Cow<'a, str>, RenderError> {
        sanitize(text, field, self.glyph_policy)
    }

    fn write_pdf(&self, pages: &[PageLayout], title: &str, family: FontFamily) -> Vec<u8> {
        let config = &self.page_config;
        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let regular_id = Ref::new(3);
        let bold_id = Ref::new(4);
        let info_id = Ref::new(5);

        // Two objects (page + content stream) per page, allocated after the fixed ones.
        let page_refs: Vec<(Ref, Ref)> = (0..pages.len() as i32)
            .map(|i| (Ref::new(6 + 2 * i), Ref::new(7 + 2 * i)))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_refs.iter().map(|(page_id, _)| *page_id))
            .count(pages.len() as i32);

        pdf.type1_font(regular_id)
            .base_font(Name(family.base_font(FontFace::Regular).as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(family.base_font(FontFace::Bold).as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        for (layout, (page_id, content_id)) in pages.iter().zip(&page_refs) {
            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, config.width_pt, config.height_pt))
                .parent(page_tree_id)
                .contents(*content_id);
            page.resources()
                .fonts()
                .pair(REGULAR_FONT, regular_id)
                .pair(BOLD_FONT, bold_id);
            page.finish();

            let content = self.content_stream(layout);
            pdf.stream(*content_id, &content);
        }

        pdf.document_info(info_id)
            .title(TextStr(title))
            .producer(TextStr(env!("CARGO_PKG_NAME")));

        pdf.finish()
    }

    fn content_stream(&self, layout: &PageLayout) -> Vec<u8> {
        let height = self.page_config.height_pt;
        let mut content = Content::new();

        for op in &layout.ops {
            match op {
                DrawOp::FillRect {
                    x,
                    y,
                    width,
                    height: rect_height,
                    color,
                } => {
                    let (r, g, b) = color.to_unit();
                    content.set_fill_rgb(r, g, b);
                    // PDF origin is bottom-left; rect takes its lower-left corner.
                    content.rect(*x, height - y - rect_height, *width, *rect_height);
                    content.fill_nonzero();
                }
                DrawOp::Text {
                    x,
                    baseline_y,
                    face,
                    size_pt,
                    color,
                    text,
                } => {
                    let (r, g, b) = color.to_unit();
                    let font = match face {
                        FontFace::Regular => REGULAR_FONT,
                        FontFace::Bold => BOLD_FONT,
                    };
                    content.set_fill_rgb(r, g, b);
                    content.begin_text();
                    content.set_font(font, *size_pt);
                    content.next_line(*x, height - baseline_y);
                    content.show(Str(&encode_win_ansi(text)));
                    content.end_text();
                }
            }
        }

        content.finish()
    }
}
