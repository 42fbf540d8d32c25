//! Static font-metric tables for the standard PDF base-14 Helvetica faces.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em, so a glyph's width in points
//! is `width * size_pt / 1000`. The base-14 fonts need no embedding, which keeps the
//! PDF small and byte-stable.
//!
//! Tables cover every WinAnsi byte 0x20..=0xFF and are indexed by the encoded byte
//! (`encode_char(c) - 0x20`). Characters with no WinAnsi byte fall back to
//! `average_char_width`; the renderer rejects or replaces those before drawing.

use serde::{Deserialize, Serialize};

use crate::layout::winansi::encode_char;

// ────────────────────────────────────────────────────────────────────────────
// Font family / face
// ────────────────────────────────────────────────────────────────────────────

/// Font families available to templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Standard sans-serif; present in every PDF viewer.
    Helvetica,
}

/// Weight used for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFamily {
    /// PostScript base-font name written into the PDF font dictionary.
    pub fn base_font(self, face: FontFace) -> &'static str {
        match (self, face) {
            (FontFamily::Helvetica, FontFace::Regular) => "Helvetica",
            (FontFamily::Helvetica, FontFace::Bold) => "Helvetica-Bold",
        }
    }

    /// CSS `font-family` stack for the HTML preview.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica, Arial, sans-serif",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font face.
pub struct FontMetricTable {
    widths: [u16; 224],
    /// Fallback width for characters with no WinAnsi byte, in 1/1000 em.
    pub average_char_width: u16,
}

impl FontMetricTable {
    fn char_units(&self, c: char) -> u16 {
        match encode_char(c) {
            Some(byte) => self.widths[usize::from(byte) - 0x20],
            None => self.average_char_width,
        }
    }

    /// Measures the rendered width of a string in points at `size_pt`.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s.chars().map(|c| u32::from(self.char_units(c))).sum();
        units as f32 * size_pt / 1000.0
    }

    /// Width of a single space in points at `size_pt`.
    pub fn space_width(&self, size_pt: f32) -> f32 {
        self.measure_str(" ", size_pt)
    }

    /// Greedy word-wrap of `text` into lines no wider than `max_width` points.
    ///
    /// Explicit newlines start a new line; an empty paragraph yields one empty line, so
    /// the result is never empty. Runs of whitespace collapse to a single space. A word
    /// wider than the line is broken between characters.
    pub fn wrap(&self, text: &str, size_pt: f32, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
            self.wrap_paragraph(paragraph, size_pt, max_width, &mut lines);
        }
        lines
    }

    fn wrap_paragraph(&self, paragraph: &str, size_pt: f32, max_width: f32, out: &mut Vec<String>) {
        let space_w = self.space_width(size_pt);
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = self.measure_str(word, size_pt);

            if word_w > max_width {
                // Flush what we have, then hard-break the oversized word.
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                let (pieces, tail_width) = self.break_word(word, size_pt, max_width);
                let mut pieces = pieces.into_iter().peekable();
                while let Some(piece) = pieces.next() {
                    if pieces.peek().is_some() {
                        out.push(piece);
                    } else {
                        current = piece;
                    }
                }
                current_width = tail_width;
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width {
                out.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            }
        }
        out.push(current);
    }

    /// Splits a word into pieces that each fit `max_width`. Returns the pieces and the
    /// width of the last one.
    fn break_word(&self, word: &str, size_pt: f32, max_width: f32) -> (Vec<String>, f32) {
        let mut pieces = Vec::new();
        let mut piece = String::new();
        let mut width = 0.0_f32;
        for c in word.chars() {
            let char_w = f32::from(self.char_units(c)) * size_pt / 1000.0;
            if !piece.is_empty() && width + char_w > max_width {
                pieces.push(std::mem::take(&mut piece));
                width = 0.0;
            }
            piece.push(c);
            width += char_w;
        }
        pieces.push(piece);
        (pieces, width)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (WinAnsi bytes 0x20..=0xFF, 224 entries each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0   1    2    3    4    5    6    7    8    9    :    ;    <    =    >    ?
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
        // @    A    B    C    D    E    F    G    H    I    J    K    L    M    N    O
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
        // P   Q    R    S    T    U    V    W    X    Y    Z    [    \    ]    ^    _
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
        // `   a    b    c    d    e    f    g    h    i    j    k    l    m    n    o
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
        // p   q    r    s    t    u    v    w    x    y    z    {    |    }    ~    (unused)
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350,
        // 0x80: € (unused) ‚ ƒ „ … † ‡ ˆ ‰ Š ‹ Œ (unused) Ž (unused)
        556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
        // 0x90: (unused) ‘ ’ “ ” • – — ˜ ™ š › œ (unused) ž Ÿ
        350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
        // 0xA0: nbsp ¡ ¢ £ ¤ ¥ ¦ § ¨ © ª « ¬ shy ® ¯
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // 0xB0: ° ± ² ³ ´ µ ¶ · ¸ ¹ º » ¼ ½ ¾ ¿
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // 0xC0: À Á Â Ã Ä Å Æ Ç È É Ê Ë Ì Í Î Ï
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // 0xD0: Ð Ñ Ò Ó Ô Õ Ö × Ø Ù Ú Û Ü Ý Þ ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // 0xE0: à á â ã ä å æ ç è é ê ë ì í î ï
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
        // 0xF0: ð ñ ò ó ô õ ö ÷ ø ù ú û ü ý þ ÿ
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
    ],
    average_char_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0   1    2    3    4    5    6    7    8    9    :    ;    <    =    >    ?
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
        // @    A    B    C    D    E    F    G    H    I    J    K    L    M    N    O
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
        // P   Q    R    S    T    U    V    W    X    Y    Z    [    \    ]    ^    _
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
        // `   a    b    c    d    e    f    g    h    i    j    k    l    m    n    o
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
        // p   q    r    s    t    u    v    w    x    y    z    {    |    }    ~    (unused)
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 350,
        // 0x80: € (unused) ‚ ƒ „ … † ‡ ˆ ‰ Š ‹ Œ (unused) Ž (unused)
        556, 350, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
        // 0x90: (unused) ‘ ’ “ ” • – — ˜ ™ š › œ (unused) ž Ÿ
        350, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 350, 500, 667,
        // 0xA0: nbsp ¡ ¢ £ ¤ ¥ ¦ § ¨ © ª « ¬ shy ® ¯
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // 0xB0: ° ± ² ³ ´ µ ¶ · ¸ ¹ º » ¼ ½ ¾ ¿
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // 0xC0: À Á Â Ã Ä Å Æ Ç È É Ê Ë Ì Í Î Ï
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // 0xD0: Ð Ñ Ò Ó Ô Õ Ö × Ø Ù Ú Û Ü Ý Þ ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // 0xE0: à á â ã ä å æ ç è é ê ë ì í î ï
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
        // 0xF0: ð ñ ò ó ô õ ö ÷ ø ù ú û ü ý þ ÿ
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
    ],
    average_char_width: 611,
};

/// Returns the static metric table for a family and face.
pub fn get_metrics(family: FontFamily, face: FontFace) -> &'static FontMetricTable {
    match (family, face) {
        (FontFamily::Helvetica, FontFace::Regular) => &HELVETICA_TABLE,
        (FontFamily::Helvetica, FontFace::Bold) => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn regular() -> &'static FontMetricTable {
        get_metrics(FontFamily::Helvetica, FontFace::Regular)
    }

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(regular().measure_str("", 12.0), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056 units → 24.672pt at 12pt
        let width = regular().measure_str("Rust", 12.0);
        assert!((width - 24.672).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_measure_str_uses_winansi_widths() {
        let m = regular();
        assert!((m.measure_str("é", 10.0) - 5.56).abs() < 1e-4);
        assert!((m.measure_str("Æ", 10.0) - 10.0).abs() < 1e-4);
        assert!((m.measure_str("—", 12.0) - 12.0).abs() < 1e-4);
        assert!((m.measure_str("™", 10.0) - 10.0).abs() < 1e-4);
        assert!((m.measure_str("É", 10.0) - 6.67).abs() < 1e-4);
    }

    #[test]
    fn test_measure_str_unencodable_falls_back_to_average() {
        let width = regular().measure_str("漢", 10.0);
        assert!((width - 5.56).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_wide_typographic_characters_fits_width() {
        let metrics = regular();
        let max_width = 532.9;
        for text in ["—".repeat(79), "Æ… ‰™ ŒÉ ".repeat(30), "ÀÁÂÃÄÅ ÈÉÊË ".repeat(20)] {
            let lines = metrics.wrap(&text, 12.0, max_width);
            assert!(lines.len() > 1, "{text}");
            for line in &lines {
                assert!(
                    metrics.measure_str(line, 12.0) <= max_width,
                    "line too wide: {line}"
                );
            }
        }
    }

    #[test]
    fn test_bold_table_covers_high_bytes() {
        let bold = get_metrics(FontFamily::Helvetica, FontFace::Bold);
        assert!((bold.measure_str("Œ", 10.0) - 10.0).abs() < 1e-4);
        assert!((bold.measure_str("ü", 10.0) - 6.11).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Professional Summary";
        let bold = get_metrics(FontFamily::Helvetica, FontFace::Bold);
        assert!(bold.measure_str(text, 14.0) > regular().measure_str(text, 14.0));
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(regular().wrap("Go, Python", 12.0, 500.0), vec!["Go, Python"]);
    }

    #[test]
    fn test_wrap_empty_text_is_one_empty_line() {
        assert_eq!(regular().wrap("", 12.0, 500.0), vec![String::new()]);
    }

    #[test]
    fn test_wrap_honors_explicit_newlines() {
        let lines = regular().wrap("Engineer at Acme\n- Built things.", 12.0, 500.0);
        assert_eq!(lines, vec!["Engineer at Acme", "- Built things."]);
    }

    #[test]
    fn test_wrap_keeps_blank_paragraphs() {
        let lines = regular().wrap("a\n\nb", 12.0, 500.0);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_long_paragraph_respects_width() {
        let text = "word ".repeat(80);
        let metrics = regular();
        let lines = metrics.wrap(&text, 12.0, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.measure_str(line, 12.0) <= 200.0, "line too wide: {line}");
        }
    }

    #[test]
    fn test_wrap_breaks_oversized_word() {
        let word = "x".repeat(100);
        let metrics = regular();
        let lines = metrics.wrap(&word, 12.0, 60.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word, "no characters lost when breaking");
        for line in &lines {
            assert!(metrics.measure_str(line, 12.0) <= 60.0);
        }
    }

    #[test]
    fn test_wrap_continues_after_broken_word() {
        let text = format!("{} tail", "x".repeat(40));
        let lines = regular().wrap(&text, 12.0, 100.0);
        assert!(lines.last().unwrap().ends_with("tail"));
    }

    #[test]
    fn test_base_font_names() {
        assert_eq!(FontFamily::Helvetica.base_font(FontFace::Regular), "Helvetica");
        assert_eq!(FontFamily::Helvetica.base_font(FontFace::Bold), "Helvetica-Bold");
    }
}
