//! WinAnsi (Windows-1252) text encoding for the base-14 PDF fonts.
//!
//! The standard Type1 fonts are addressed with single-byte strings. WinAnsi covers
//! printable ASCII, the Latin-1 supplement, and common typographic punctuation (curly
//! quotes, dashes, bullet, ellipsis, euro). Anything else (emoji, CJK, most symbols)
//! has no byte and is handled according to `GlyphPolicy`.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::layout::encode_char;
use crate::render::RenderError;

/// Byte written for a character the font cannot show under `GlyphPolicy::Replace`.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// What to do with characters outside WinAnsi.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphPolicy {
    /// Fail the render with `RenderError::UnsupportedCharacter`.
    #[default]
    Reject,
    /// Substitute `?` and log a warning.
    Replace,
}

impl FromStr for GlyphPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(GlyphPolicy::Reject),
            "replace" => Ok(GlyphPolicy::Replace),
            other => Err(format!("unknown glyph policy '{other}' (expected reject|replace)")),
        }
    }
}

/// Layout whitespace that never reaches the content stream as a glyph.
fn is_layout_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t')
}

/// Checks `text` against WinAnsi before layout.
///
/// Returns the text unchanged when every character is encodable. Otherwise `Reject`
/// fails on the first offending character and `Replace` swaps each one for `?`.
pub fn sanitize<'a>(
    text: &'a str,
    field: &'static str,
    policy: GlyphPolicy,
) -> Result<Cow<'a, str>, RenderError> {
    let unsupported = |c: char| !is_layout_whitespace(c) && encode_char(c).is_none();

    let Some(first) = text.chars().find(|&c| unsupported(c)) else {
        return Ok(Cow::Borrowed(text));
    };

    match policy {
        GlyphPolicy::Reject => Err(RenderError::UnsupportedCharacter {
            character: first,
            field,
        }),
        GlyphPolicy::Replace => {
            let replaced: String = text
                .chars()
                .map(|c| if unsupported(c) { REPLACEMENT_BYTE as char } else { c })
                .collect();
            warn!(field, "Replaced characters the PDF font cannot encode");
            Ok(Cow::Owned(replaced))
        }
    }
}

/// Encodes already-sanitized text to WinAnsi bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|&c| !is_layout_whitespace(c))
        .map(|c| encode_char(c).unwrap_or(REPLACEMENT_BYTE))
        .collect()
}
