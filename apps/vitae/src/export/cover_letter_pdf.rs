//! Cover-letter PDF construction.
//!
//! The sender block borrows `PersonalInfo` from the resume aggregate at
//! export time (a live read, never a stored copy). All four style presets
//! share one content structure (sender block, date, recipient block,
//! optional subject, greeting, introduction, body paragraphs, conclusion,
//! closing, signature) and differ only in font family and border
//! treatment.

use chrono::{NaiveDate, Utc};
use printpdf::{
    Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::errors::AppError;
use crate::export::metrics::{get_metrics, FontMetrics, PT_TO_MM};
use crate::export::style::{
    border_treatment, letter_fonts, BorderTreatment, MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};
use crate::models::{CoverLetter, PersonalInfo};

const BODY_PT: f32 = 10.5;
const INK: (f32, f32, f32) = (0.13, 0.13, 0.15);

/// Builds the letter PDF bytes using the style preset stored on the letter.
pub fn build_cover_letter_pdf(
    letter: &CoverLetter,
    personal: &PersonalInfo,
) -> Result<Vec<u8>, AppError> {
    let fonts = letter_fonts(letter.template);
    let (doc, page, layer) =
        PdfDocument::new("Cover Letter", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(fonts.regular)
        .map_err(|e| AppError::Export(format!("cannot load builtin font: {e}")))?;
    let bold = doc
        .add_builtin_font(fonts.bold)
        .map_err(|e| AppError::Export(format!("cannot load builtin font: {e}")))?;

    draw_border(&layer, border_treatment(letter.template));

    let mut writer = LetterWriter {
        layer: &layer,
        metrics: get_metrics(fonts.family),
        regular: &regular,
        bold: &bold,
        y: PAGE_HEIGHT_MM - MARGIN_MM - 10.0,
    };

    // Sender block: live read of the resume's personal info.
    writer.line(&personal.full_name, BODY_PT, true);
    for value in [
        personal.email.as_str(),
        personal.phone.as_str(),
        personal.location.as_str(),
    ] {
        if !value.is_empty() {
            writer.line(value, 9.0, false);
        }
    }
    writer.space(6.0);

    writer.line(&letter_date(&letter.date), BODY_PT, false);
    writer.space(6.0);

    // Recipient block.
    for value in [
        letter.recipient_name.as_str(),
        letter.recipient_title.as_str(),
        letter.company_name.as_str(),
        letter.company_address.as_str(),
    ] {
        if !value.is_empty() {
            writer.line(value, BODY_PT, false);
        }
    }
    writer.space(6.0);

    if !letter.subject.is_empty() {
        writer.line(&letter.subject, BODY_PT, true);
        writer.space(4.0);
    }

    if !letter.greeting.is_empty() {
        writer.line(&letter.greeting, BODY_PT, false);
        writer.space(4.0);
    }

    if !letter.introduction.is_empty() {
        writer.paragraph(&letter.introduction);
    }
    for paragraph in letter.filled_paragraphs() {
        writer.paragraph(paragraph);
    }
    if !letter.conclusion.is_empty() {
        writer.paragraph(&letter.conclusion);
    }

    writer.space(2.0);
    if !letter.closing.is_empty() {
        writer.line(&letter.closing, BODY_PT, false);
    }
    writer.space(8.0);
    if !personal.full_name.is_empty() {
        writer.line(&personal.full_name, BODY_PT, true);
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::Export(format!("PDF byte generation failed: {e}")))
}

/// A stored full date renders long form ("August 25, 2026"); any other
/// non-empty string passes through verbatim; empty falls back to today.
fn letter_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return Utc::now().format("%B %d, %Y").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Border treatments
// ────────────────────────────────────────────────────────────────────────────

fn draw_border(layer: &PdfLayerReference, treatment: BorderTreatment) {
    layer.set_outline_color(Color::Rgb(Rgb::new(INK.0, INK.1, INK.2, None)));
    let inset = MARGIN_MM - 6.0;
    match treatment {
        BorderTreatment::None => {}
        BorderTreatment::Frame => {
            layer.set_outline_thickness(0.6);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(inset), Mm(inset)), false),
                    (Point::new(Mm(PAGE_WIDTH_MM - inset), Mm(inset)), false),
                    (
                        Point::new(Mm(PAGE_WIDTH_MM - inset), Mm(PAGE_HEIGHT_MM - inset)),
                        false,
                    ),
                    (Point::new(Mm(inset), Mm(PAGE_HEIGHT_MM - inset)), false),
                ],
                is_closed: true,
            });
        }
        BorderTreatment::TopRule => {
            layer.set_outline_thickness(2.5);
            rule(layer, PAGE_HEIGHT_MM - inset);
        }
        BorderTreatment::TopAndBottomRules => {
            layer.set_outline_thickness(0.8);
            rule(layer, PAGE_HEIGHT_MM - inset);
            rule(layer, inset);
        }
    }
}

fn rule(layer: &PdfLayerReference, y: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_MM), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
        ],
        is_closed: false,
    });
}

// ────────────────────────────────────────────────────────────────────────────
// Letter writer
// ────────────────────────────────────────────────────────────────────────────

struct LetterWriter<'a> {
    layer: &'a PdfLayerReference,
    metrics: &'static FontMetrics,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
    y: f32,
}

impl LetterWriter<'_> {
    fn line_height(size_pt: f32) -> f32 {
        size_pt * PT_TO_MM * 1.5
    }

    fn fits(&self, needed_mm: f32) -> bool {
        self.y - needed_mm >= MARGIN_MM
    }

    fn line(&mut self, text: &str, size_pt: f32, bold: bool) {
        let needed = Self::line_height(size_pt);
        if text.is_empty() || !self.fits(needed) {
            return;
        }
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(INK.0, INK.1, INK.2, None)));
        let font = if bold { self.bold } else { self.regular };
        self.layer
            .use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= needed;
    }

    /// A wrapped body paragraph followed by paragraph spacing.
    fn paragraph(&mut self, text: &str) {
        let width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        for line in self.metrics.wrap(text, width, BODY_PT) {
            self.line(&line, BODY_PT, false);
        }
        self.space(4.0);
    }

    fn space(&mut self, mm: f32) {
        self.y -= mm;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LetterStyle;

    fn letter() -> CoverLetter {
        CoverLetter {
            recipient_name: "Dr. Grace Hopper".to_string(),
            recipient_title: "Director of Engineering".to_string(),
            company_name: "Acme".to_string(),
            date: "2026-08-25".to_string(),
            subject: "Application for Principal Engineer".to_string(),
            introduction: "I am writing to apply for the Principal Engineer role.".to_string(),
            body_paragraphs: vec![
                "Over the past decade I have built document pipelines that render \
                 the same semantic model into screen and print form."
                    .to_string(),
            ],
            conclusion: "I would welcome the chance to discuss the role.".to_string(),
            ..CoverLetter::default()
        }
    }

    fn personal() -> PersonalInfo {
        PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 0000 0000".to_string(),
            location: "London".to_string(),
            ..PersonalInfo::default()
        }
    }

    #[test]
    fn test_all_four_presets_produce_pdf_bytes() {
        for style in LetterStyle::ALL {
            let mut letter = letter();
            letter.template = style;
            let bytes = build_cover_letter_pdf(&letter, &personal()).expect("export");
            assert!(bytes.starts_with(b"%PDF"), "not a PDF for {style:?}");
        }
    }

    #[test]
    fn test_default_letter_with_default_personal_info_exports() {
        let bytes = build_cover_letter_pdf(&CoverLetter::default(), &PersonalInfo::default())
            .expect("export");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_letter_date_formats() {
        assert_eq!(letter_date("2026-08-25"), "August 25, 2026");
        assert_eq!(letter_date("next Tuesday"), "next Tuesday");
        assert!(!letter_date("").is_empty()); // today
    }
}
