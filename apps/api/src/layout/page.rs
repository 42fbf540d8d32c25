//! Page geometry for the exported PDF.
//!
//! Layout measurements are specified in millimetres (matching how the résumé design is
//! described) and converted to PDF points here. All positions downstream are points,
//! measured from the top-left corner of the page.

use serde::{Deserialize, Serialize};

/// Points per millimetre (72 pt per inch / 25.4 mm per inch).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

/// Layout parameters for every page of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    pub margin_top_pt: f32,
    /// Content stops this far above the bottom edge; the next line starts a new page.
    pub break_margin_pt: f32,
    /// Horizontal inset of text inside a cell.
    pub cell_padding_pt: f32,
    /// Height of single-line cells (name header, contact line, section titles).
    pub cell_height_pt: f32,
    /// Line height of wrapped section bodies.
    pub body_line_height_pt: f32,
    /// Vertical gap after each section.
    pub section_gap_pt: f32,
    pub name_size_pt: f32,
    pub title_size_pt: f32,
    pub body_size_pt: f32,
}

impl PageConfig {
    /// Usable text width between the margins.
    pub fn content_width(&self) -> f32 {
        self.width_pt - self.margin_left_pt - self.margin_right_pt
    }

    /// Width available to text inside a full-width cell.
    pub fn text_width(&self) -> f32 {
        self.content_width() - 2.0 * self.cell_padding_pt
    }

    /// Lowest y a line may end at before a page break.
    pub fn break_y(&self) -> f32 {
        self.height_pt - self.break_margin_pt
    }
}

/// A4 portrait, 10 mm margins, 20 mm auto-break margin.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width_pt: mm(210.0),
        height_pt: mm(297.0),
        margin_left_pt: mm(10.0),
        margin_right_pt: mm(10.0),
        margin_top_pt: mm(10.0),
        break_margin_pt: mm(20.0),
        cell_padding_pt: mm(1.0),
        cell_height_pt: mm(10.0),
        body_line_height_pt: mm(8.0),
        section_gap_pt: mm(2.0),
        name_size_pt: 16.0,
        title_size_pt: 14.0,
        body_size_pt: 12.0,
    }
}
