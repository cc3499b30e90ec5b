//! Static width tables for the built-in PDF font families.
//!
//! Character widths are in em units (relative to font size); a rendered
//! width in millimetres is `em × font_size_pt × 0.352778`. The tables are
//! an approximation of the real AFM metrics, good enough for column
//! wrapping: a word landing within ±1–2% of the column edge may wrap one
//! word early, which is visually harmless. All tables cover ASCII
//! 0x20..=0x7E; other codepoints fall back to an average width.

/// Millimetres per PostScript point.
pub const PT_TO_MM: f32 = 0.352_778;

/// The built-in font families the exporter draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfFontFamily {
    Helvetica,
    Times,
    Courier,
}

/// Static character-width table for one family.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units.
pub struct FontMetrics {
    widths: [f32; 95],
    /// Fallback width for codepoints outside 0x20..=0x7E.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetrics {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Width of a string in millimetres at the given font size.
    #[cfg(test)]
    pub fn measure_mm(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_str(s) * font_size_pt * PT_TO_MM
    }

    /// Greedy word-wrap into lines no wider than `max_width_mm` at
    /// `font_size_pt`. A single word wider than the column gets a line of
    /// its own rather than being split.
    pub fn wrap(&self, text: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
        let max_em = max_width_mm / (font_size_pt * PT_TO_MM);
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_w = 0.0_f32;

        for word in text.split_whitespace() {
            let word_w = self.measure_str(word);
            if !current.is_empty() && current_w + self.space_width + word_w > max_em {
                lines.push(std::mem::take(&mut current));
                current_w = 0.0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_w += self.space_width;
            }
            current.push_str(word);
            current_w += word_w;
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica, the resume export face.
static HELVETICA_TABLE: FontMetrics = FontMetrics {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.28, 0.28, 0.36, 0.56, 0.56, 0.89, 0.67, 0.19, 0.33, 0.33, 0.39, 0.58, 0.28, 0.33, 0.28, 0.28,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.58, 0.58, 0.58, 0.56, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.67, 0.72, 0.72, 0.67, 0.61, 0.78, 0.72, 0.28, 0.50, 0.67, 0.56, 0.83,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.72, 0.78, 0.67, 0.78, 0.72, 0.67, 0.61, 0.72, 0.67, 0.94, 0.67, 0.67, 0.61,
        // [     \     ]     ^     _     `
        0.28, 0.28, 0.28, 0.47, 0.56, 0.33,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.28, 0.56, 0.56, 0.22, 0.22, 0.50, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.50, 0.28, 0.56, 0.50, 0.72, 0.50, 0.50, 0.50,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.58,
    ],
    average_char_width: 0.53,
    space_width: 0.28,
};

/// Times, the formal/creative letter face.
static TIMES_TABLE: FontMetrics = FontMetrics {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.33, 0.41, 0.50, 0.50, 0.83, 0.78, 0.18, 0.33, 0.33, 0.50, 0.56, 0.25, 0.33, 0.25, 0.28,
        // 0     1     2     3     4     5     6     7     8     9
        0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.56, 0.56, 0.56, 0.44, 0.92,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.72, 0.67, 0.67, 0.72, 0.61, 0.56, 0.72, 0.72, 0.33, 0.39, 0.72, 0.61, 0.89,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.72, 0.72, 0.56, 0.72, 0.67, 0.56, 0.61, 0.72, 0.72, 0.94, 0.72, 0.72, 0.61,
        // [     \     ]     ^     _     `
        0.33, 0.28, 0.33, 0.47, 0.50, 0.33,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.44, 0.50, 0.44, 0.50, 0.44, 0.33, 0.50, 0.50, 0.28, 0.28, 0.50, 0.28, 0.78,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.50, 0.50, 0.50, 0.50, 0.33, 0.39, 0.28, 0.50, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.48, 0.20, 0.48, 0.54,
    ],
    average_char_width: 0.48,
    space_width: 0.25,
};

/// Courier is fixed pitch; every glyph is 0.6 em.
static COURIER_TABLE: FontMetrics = FontMetrics {
    widths: [0.6; 95],
    average_char_width: 0.6,
    space_width: 0.6,
};

/// Returns the static metric table for a family.
pub fn get_metrics(family: PdfFontFamily) -> &'static FontMetrics {
    match family {
        PdfFontFamily::Helvetica => &HELVETICA_TABLE,
        PdfFontFamily::Times => &TIMES_TABLE,
        PdfFontFamily::Courier => &COURIER_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_is_zero() {
        assert_eq!(get_metrics(PdfFontFamily::Helvetica).measure_str(""), 0.0);
    }

    #[test]
    fn test_courier_is_fixed_pitch() {
        let metrics = get_metrics(PdfFontFamily::Courier);
        let w = metrics.measure_str("iiii");
        let m = metrics.measure_str("mmmm");
        assert!((w - m).abs() < 1e-6, "fixed pitch: {w} vs {m}");
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let metrics = get_metrics(PdfFontFamily::Helvetica);
        let w = metrics.measure_str("é");
        assert!((w - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_measure_mm_scales_with_font_size() {
        let metrics = get_metrics(PdfFontFamily::Helvetica);
        let at_10 = metrics.measure_mm("Rust", 10.0);
        let at_20 = metrics.measure_mm("Rust", 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_empty_yields_no_lines() {
        let metrics = get_metrics(PdfFontFamily::Helvetica);
        assert!(metrics.wrap("", 100.0, 10.0).is_empty());
        assert!(metrics.wrap("   ", 100.0, 10.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_is_single_line() {
        let metrics = get_metrics(PdfFontFamily::Helvetica);
        let lines = metrics.wrap("Principal Engineer", 100.0, 10.0);
        assert_eq!(lines, vec!["Principal Engineer".to_string()]);
    }

    #[test]
    fn test_wrap_long_text_splits_and_preserves_words() {
        let metrics = get_metrics(PdfFontFamily::Helvetica);
        let text = "Designed and shipped a multi-template rendering pipeline for \
                    resume documents with themed PDF export and snapshot persistence";
        let lines = metrics.wrap(text, 60.0, 10.0);
        assert!(lines.len() > 1, "expected multiple lines, got {lines:?}");
        // Rejoining reproduces the normalized input.
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
        // No line exceeds the column width.
        for line in &lines {
            assert!(
                metrics.measure_mm(line, 10.0) <= 60.0 + 1e-3,
                "line too wide: {line}"
            );
        }
    }

    #[test]
    fn test_wrap_oversized_word_gets_own_line() {
        let metrics = get_metrics(PdfFontFamily::Helvetica);
        let lines = metrics.wrap("a Supercalifragilisticexpialidocious b", 10.0, 12.0);
        assert!(lines.iter().any(|l| l == "Supercalifragilisticexpialidocious"));
    }
}
