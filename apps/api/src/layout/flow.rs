//! Cursor-based document flow.
//!
//! `FlowBuilder` keeps a vertical cursor on the current page and emits `DrawOp`s for
//! single-line cells, filled cells, and word-wrapped blocks. A line that would cross
//! `PageConfig::break_y` starts a new page, so content of any length paginates.
//!
//! Coordinates are points from the top-left of the page; the PDF writer flips them.

use serde::Serialize;

use crate::layout::font_metrics::{get_metrics, FontFace, FontFamily};
use crate::layout::page::PageConfig;
use crate::templates::Rgb;

/// A positioned drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    /// Solid rectangle with its top-left corner at (`x`, `y`).
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    /// One line of text whose baseline sits at `baseline_y`.
    Text {
        x: f32,
        baseline_y: f32,
        face: FontFace,
        size_pt: f32,
        color: Rgb,
        text: String,
    },
}

/// All draw operations for one page, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageLayout {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl PageLayout {
    /// Text of every `Text` op on the page, top to bottom.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::FillRect { .. } => None,
        })
    }
}

pub struct FlowBuilder<'a> {
    config: &'a PageConfig,
    family: FontFamily,
    pages: Vec<PageLayout>,
    y: f32,
}

impl<'a> FlowBuilder<'a> {
    pub fn new(config: &'a PageConfig, family: FontFamily) -> Self {
        Self {
            config,
            family,
            pages: vec![PageLayout::default()],
            y: config.margin_top_pt,
        }
    }

    /// A full-width, single-line cell filled with `fill`. Line breaks and tabs become spaces.
    pub fn filled_cell(&mut self, text: &str, face: FontFace, size_pt: f32, color: Rgb, fill: Rgb) {
        let height = self.config.cell_height_pt;
        self.break_if_needed(height);
        self.push(DrawOp::FillRect {
            x: self.config.margin_left_pt,
            y: self.y,
            width: self.config.content_width(),
            height,
            color: fill,
        });
        self.text_line(&single_line(text), face, size_pt, color, height);
        self.y += height;
    }

    /// A full-width, single-line cell without background. Text is not wrapped; line
    /// breaks and tabs become spaces.
    pub fn cell(&mut self, text: &str, face: FontFace, size_pt: f32, color: Rgb) {
        let height = self.config.cell_height_pt;
        self.break_if_needed(height);
        self.text_line(&single_line(text), face, size_pt, color, height);
        self.y += height;
    }

    /// A word-wrapped block; each wrapped line is `line_height` tall and may start a new page.
    pub fn multi_cell(&mut self, text: &str, face: FontFace, size_pt: f32, color: Rgb, line_height: f32) {
        let metrics = get_metrics(self.family, face);
        for line in metrics.wrap(text, size_pt, self.config.text_width()) {
            self.break_if_needed(line_height);
            self.text_line(&line, face, size_pt, color, line_height);
            self.y += line_height;
        }
    }

    /// Moves the cursor down without drawing. Never starts a new page by itself.
    pub fn gap(&mut self, height: f32) {
        self.y += height;
    }

    pub fn finish(self) -> Vec<PageLayout> {
        self.pages
    }

    fn break_if_needed(&mut self, height: f32) {
        let at_top = (self.y - self.config.margin_top_pt).abs() < f32::EPSILON;
        if !at_top && self.y + height > self.config.break_y() {
            self.pages.push(PageLayout::default());
            self.y = self.config.margin_top_pt;
        }
    }

    /// Vertically centers a line of text in a band of `height` starting at the cursor.
    fn text_line(&mut self, text: &str, face: FontFace, size_pt: f32, color: Rgb, height: f32) {
        if text.is_empty() {
            return;
        }
        let baseline_y = self.y + 0.5 * height + 0.3 * size_pt;
        self.push(DrawOp::Text {
            x: self.config.margin_left_pt + self.config.cell_padding_pt,
            baseline_y,
            face,
            size_pt,
            color,
            text: text.to_string(),
        });
    }

    fn push(&mut self, op: DrawOp) {
        // `pages` always holds at least one page.
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }
}

/// Flattens text for a single-line cell.
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ")
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect()
}

#[cfg(test)]
impl FlowBuilder<'_> {
    /// Current cursor position (top of the next line).
    pub fn cursor_y(&self) -> f32 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
