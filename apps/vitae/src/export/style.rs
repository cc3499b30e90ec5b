//! Page geometry, color palettes, and letter style presets for the PDF
//! exporter. All values are static data; the document builders only read
//! from here.

use printpdf::BuiltinFont;

use crate::export::metrics::PdfFontFamily;
use crate::models::LetterStyle;
use crate::render::ThemeId;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry (A4 portrait)
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;

/// Height of the themed header band on the resume page.
pub const HEADER_BAND_MM: f32 = 38.0;

/// Left column (skills, education, certificates, languages).
pub const LEFT_COL_X_MM: f32 = MARGIN_MM;
pub const LEFT_COL_WIDTH_MM: f32 = 62.0;
/// Right column (experience, projects, achievements, references).
pub const RIGHT_COL_X_MM: f32 = MARGIN_MM + LEFT_COL_WIDTH_MM + 8.0;
pub const RIGHT_COL_WIDTH_MM: f32 = PAGE_WIDTH_MM - RIGHT_COL_X_MM - MARGIN_MM;

// ────────────────────────────────────────────────────────────────────────────
// Theme palettes
// ────────────────────────────────────────────────────────────────────────────

/// RGB triple, components in 0.0..=1.0.
pub type RgbTriple = (f32, f32, f32);

/// The PDF-side counterpart of a theme token set.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfPalette {
    /// Header band fill and section accents.
    pub accent: RgbTriple,
    /// Body text.
    pub text: RgbTriple,
    /// Dates, locations, secondary labels.
    pub muted: RgbTriple,
    /// Text drawn on top of the accent fill.
    pub on_accent: RgbTriple,
}

static BLUE_PALETTE: PdfPalette = PdfPalette {
    accent: (0.11, 0.30, 0.65),
    text: (0.15, 0.16, 0.18),
    muted: (0.42, 0.45, 0.50),
    on_accent: (1.0, 1.0, 1.0),
};

static EMERALD_PALETTE: PdfPalette = PdfPalette {
    accent: (0.02, 0.47, 0.34),
    text: (0.15, 0.16, 0.18),
    muted: (0.42, 0.45, 0.50),
    on_accent: (1.0, 1.0, 1.0),
};

static VIOLET_PALETTE: PdfPalette = PdfPalette {
    accent: (0.43, 0.23, 0.67),
    text: (0.15, 0.16, 0.18),
    muted: (0.42, 0.45, 0.50),
    on_accent: (1.0, 1.0, 1.0),
};

static ROSE_PALETTE: PdfPalette = PdfPalette {
    accent: (0.75, 0.11, 0.32),
    text: (0.15, 0.16, 0.18),
    muted: (0.42, 0.45, 0.50),
    on_accent: (1.0, 1.0, 1.0),
};

static SLATE_PALETTE: PdfPalette = PdfPalette {
    accent: (0.18, 0.22, 0.28),
    text: (0.15, 0.16, 0.18),
    muted: (0.42, 0.45, 0.50),
    on_accent: (1.0, 1.0, 1.0),
};

pub fn palette(theme: ThemeId) -> &'static PdfPalette {
    match theme {
        ThemeId::Blue => &BLUE_PALETTE,
        ThemeId::Emerald => &EMERALD_PALETTE,
        ThemeId::Violet => &VIOLET_PALETTE,
        ThemeId::Rose => &ROSE_PALETTE,
        ThemeId::Slate => &SLATE_PALETTE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Letter style presets
// ────────────────────────────────────────────────────────────────────────────

/// Decorative border drawn around or above the letter body. Presets differ
/// only in this and in font family; content structure never varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderTreatment {
    /// No decoration.
    None,
    /// Thin full-page frame inside the margins.
    Frame,
    /// Thick rule across the top of the page.
    TopRule,
    /// Thin rules across the top and bottom.
    TopAndBottomRules,
}

/// Font faces for a letter preset.
#[derive(Debug, Clone, Copy)]
pub struct LetterFontSet {
    pub regular: BuiltinFont,
    pub bold: BuiltinFont,
    pub family: PdfFontFamily,
}

pub fn letter_fonts(style: LetterStyle) -> LetterFontSet {
    match style {
        LetterStyle::Formal | LetterStyle::Creative => LetterFontSet {
            regular: BuiltinFont::TimesRoman,
            bold: BuiltinFont::TimesBold,
            family: PdfFontFamily::Times,
        },
        LetterStyle::Modern => LetterFontSet {
            regular: BuiltinFont::Helvetica,
            bold: BuiltinFont::HelveticaBold,
            family: PdfFontFamily::Helvetica,
        },
        LetterStyle::Simple => LetterFontSet {
            regular: BuiltinFont::Courier,
            bold: BuiltinFont::CourierBold,
            family: PdfFontFamily::Courier,
        },
    }
}

pub fn border_treatment(style: LetterStyle) -> BorderTreatment {
    match style {
        LetterStyle::Formal => BorderTreatment::Frame,
        LetterStyle::Modern => BorderTreatment::TopRule,
        LetterStyle::Creative => BorderTreatment::TopAndBottomRules,
        LetterStyle::Simple => BorderTreatment::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_a_palette() {
        for theme in ThemeId::ALL {
            let p = palette(theme);
            for c in [p.accent.0, p.accent.1, p.accent.2] {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_palettes_differ_by_accent() {
        assert_ne!(palette(ThemeId::Blue).accent, palette(ThemeId::Rose).accent);
        assert_ne!(palette(ThemeId::Emerald).accent, palette(ThemeId::Slate).accent);
    }

    #[test]
    fn test_columns_fit_inside_margins() {
        assert!(LEFT_COL_X_MM + LEFT_COL_WIDTH_MM < RIGHT_COL_X_MM);
        assert!((RIGHT_COL_X_MM + RIGHT_COL_WIDTH_MM - (PAGE_WIDTH_MM - MARGIN_MM)).abs() < 1e-4);
    }

    #[test]
    fn test_letter_presets_select_font_and_border_only() {
        assert_eq!(letter_fonts(LetterStyle::Formal).family, PdfFontFamily::Times);
        assert_eq!(letter_fonts(LetterStyle::Creative).family, PdfFontFamily::Times);
        assert_eq!(letter_fonts(LetterStyle::Modern).family, PdfFontFamily::Helvetica);
        assert_eq!(letter_fonts(LetterStyle::Simple).family, PdfFontFamily::Courier);

        assert_eq!(border_treatment(LetterStyle::Simple), BorderTreatment::None);
        assert_ne!(
            border_treatment(LetterStyle::Formal),
            border_treatment(LetterStyle::Modern)
        );
    }
}
