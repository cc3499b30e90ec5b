//! Resume PDF construction.
//!
//! The export shape is fixed and independent of the on-screen layout
//! choice: a themed header band, an optional summary strip, then two
//! columns: skills, education, certificates, and languages on the left;
//! experience, projects, achievements, and references on the right. The
//! page is single-page by design; entries that would cross the bottom
//! margin are dropped at the page floor.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb,
};

use crate::errors::AppError;
use crate::export::metrics::{get_metrics, FontMetrics, PdfFontFamily, PT_TO_MM};
use crate::export::style::{
    palette, PdfPalette, RgbTriple, HEADER_BAND_MM, LEFT_COL_WIDTH_MM, LEFT_COL_X_MM, MARGIN_MM,
    PAGE_HEIGHT_MM, PAGE_WIDTH_MM, RIGHT_COL_WIDTH_MM, RIGHT_COL_X_MM,
};
use crate::models::ResumeData;
use crate::render::format::{date_range, degree_line, format_date};
use crate::render::ThemeId;

const BODY_PT: f32 = 9.0;
const SMALL_PT: f32 = 8.0;
const HEADING_PT: f32 = 10.5;

struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    metrics: &'static FontMetrics,
}

/// Builds the complete PDF byte stream. Any printpdf failure aborts the
/// whole export; no partial output escapes.
pub fn build_resume_pdf(data: &ResumeData, theme: ThemeId) -> Result<Vec<u8>, AppError> {
    let palette = palette(theme);
    let (doc, page, layer) =
        PdfDocument::new("Resume", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
    let layer = doc.get_page(page).get_layer(layer);

    let fonts = FontSet {
        regular: builtin(&doc, BuiltinFont::Helvetica)?,
        bold: builtin(&doc, BuiltinFont::HelveticaBold)?,
        metrics: get_metrics(PdfFontFamily::Helvetica),
    };

    let mut body_top = draw_header(&layer, &fonts, data, palette);

    if !data.personal_info.summary.is_empty() {
        let mut strip = ColumnWriter {
            layer: &layer,
            fonts: &fonts,
            x: MARGIN_MM,
            width: PAGE_WIDTH_MM - 2.0 * MARGIN_MM,
            y: body_top,
        };
        strip.wrapped(&data.personal_info.summary, BODY_PT, false, palette.text);
        body_top = strip.y - 4.0;
    }

    draw_left_column(&layer, &fonts, data, palette, body_top);
    draw_right_column(&layer, &fonts, data, palette, body_top);

    doc.save_to_bytes()
        .map_err(|e| AppError::Export(format!("PDF byte generation failed: {e}")))
}

fn builtin(
    doc: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, AppError> {
    doc.add_builtin_font(font)
        .map_err(|e| AppError::Export(format!("cannot load builtin font: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Header band
// ────────────────────────────────────────────────────────────────────────────

/// Draws the accent band with identity and contact lines; returns the y
/// position where body content starts.
fn draw_header(
    layer: &PdfLayerReference,
    fonts: &FontSet,
    data: &ResumeData,
    palette: &PdfPalette,
) -> f32 {
    let info = &data.personal_info;

    set_fill(layer, palette.accent);
    layer.add_rect(
        Rect::new(
            Mm(0.0),
            Mm(PAGE_HEIGHT_MM - HEADER_BAND_MM),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
        )
        .with_mode(PaintMode::Fill),
    );

    set_fill(layer, palette.on_accent);
    let mut y = PAGE_HEIGHT_MM - 14.0;
    if !info.full_name.is_empty() {
        layer.use_text(&info.full_name, 20.0, Mm(MARGIN_MM), Mm(y), &fonts.bold);
        y -= 7.5;
    }
    if !info.title.is_empty() {
        layer.use_text(&info.title, 11.0, Mm(MARGIN_MM), Mm(y), &fonts.regular);
        y -= 6.0;
    }

    let mut meta: Vec<&str> = Vec::new();
    for value in [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
        info.website.as_str(),
    ] {
        if !value.is_empty() {
            meta.push(value);
        }
    }
    if !meta.is_empty() {
        layer.use_text(meta.join("  |  "), SMALL_PT, Mm(MARGIN_MM), Mm(y), &fonts.regular);
    }

    PAGE_HEIGHT_MM - HEADER_BAND_MM - 8.0
}

// ────────────────────────────────────────────────────────────────────────────
// Column writer
// ────────────────────────────────────────────────────────────────────────────

/// Cursor over one column. `y` is the baseline of the next line; the writer
/// refuses to draw anything that would land below the bottom margin.
struct ColumnWriter<'a> {
    layer: &'a PdfLayerReference,
    fonts: &'a FontSet,
    x: f32,
    width: f32,
    y: f32,
}

impl ColumnWriter<'_> {
    fn line_height(size_pt: f32) -> f32 {
        size_pt * PT_TO_MM * 1.45
    }

    fn fits(&self, needed_mm: f32) -> bool {
        self.y - needed_mm >= MARGIN_MM
    }

    /// Section heading: bold accent label with a short rule underneath.
    /// Returns false (and draws nothing) when the column is out of space.
    fn heading(&mut self, label: &str, palette: &PdfPalette) -> bool {
        let needed = Self::line_height(HEADING_PT) + 3.0;
        if !self.fits(needed) {
            return false;
        }
        set_fill(self.layer, palette.accent);
        self.layer
            .use_text(label, HEADING_PT, Mm(self.x), Mm(self.y), &self.fonts.bold);
        let rule_y = self.y - 1.6;
        set_outline(self.layer, palette.accent);
        self.layer.set_outline_thickness(0.8);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(self.x), Mm(rule_y)), false),
                (Point::new(Mm(self.x + 12.0), Mm(rule_y)), false),
            ],
            is_closed: false,
        });
        self.y -= needed;
        true
    }

    /// One unwrapped line. Silently dropped at the page floor.
    fn line(&mut self, text: &str, size_pt: f32, bold: bool, color: RgbTriple) {
        if text.is_empty() {
            return;
        }
        let needed = Self::line_height(size_pt);
        if !self.fits(needed) {
            return;
        }
        set_fill(self.layer, color);
        let font = if bold { &self.fonts.bold } else { &self.fonts.regular };
        self.layer.use_text(text, size_pt, Mm(self.x), Mm(self.y), font);
        self.y -= needed;
    }

    /// Word-wrapped text across the column width, stopping at the floor.
    fn wrapped(&mut self, text: &str, size_pt: f32, bold: bool, color: RgbTriple) {
        for line in self.fonts.metrics.wrap(text, self.width, size_pt) {
            if !self.fits(Self::line_height(size_pt)) {
                return;
            }
            self.line(&line, size_pt, bold, color);
        }
    }

    fn space(&mut self, mm: f32) {
        self.y -= mm;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Columns
// ────────────────────────────────────────────────────────────────────────────

fn draw_left_column(
    layer: &PdfLayerReference,
    fonts: &FontSet,
    data: &ResumeData,
    palette: &PdfPalette,
    top: f32,
) {
    let mut col = ColumnWriter {
        layer,
        fonts,
        x: LEFT_COL_X_MM,
        width: LEFT_COL_WIDTH_MM,
        y: top,
    };

    let skill_groups = data.qualifying_skill_groups();
    if !skill_groups.is_empty() && col.heading("Skills", palette) {
        for group in skill_groups {
            if !group.category.is_empty() {
                col.line(&group.category, BODY_PT, true, palette.text);
            }
            for skill in group.named_skills() {
                col.line(
                    &format!("{}  ({})", skill.name, skill.proficiency.label()),
                    SMALL_PT,
                    false,
                    palette.muted,
                );
            }
            col.space(1.5);
        }
        col.space(3.0);
    }

    let education = data.qualifying_education();
    if !education.is_empty() && col.heading("Education", palette) {
        for edu in education {
            col.line(
                &degree_line(&edu.degree, &edu.field_of_study),
                BODY_PT,
                true,
                palette.text,
            );
            col.line(&edu.school, SMALL_PT, false, palette.text);
            col.line(
                &date_range(&edu.start_date, &edu.end_date, edu.current),
                SMALL_PT,
                false,
                palette.muted,
            );
            if !edu.gpa.is_empty() {
                col.line(&format!("GPA: {}", edu.gpa), SMALL_PT, false, palette.muted);
            }
            col.space(2.0);
        }
        col.space(3.0);
    }

    let certificates = data.qualifying_certificates();
    if !certificates.is_empty() && col.heading("Certificates", palette) {
        for cert in certificates {
            col.line(&cert.name, BODY_PT, true, palette.text);
            let meta = [cert.issuer.clone(), format_date(&cert.date)]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            col.line(&meta, SMALL_PT, false, palette.muted);
            col.space(1.5);
        }
        col.space(3.0);
    }

    let languages = data.qualifying_languages();
    if !languages.is_empty() && col.heading("Languages", palette) {
        for language in languages {
            let text = if language.fluency.is_empty() {
                language.name.clone()
            } else {
                format!("{}  ({})", language.name, language.fluency)
            };
            col.line(&text, SMALL_PT, false, palette.text);
        }
    }
}

fn draw_right_column(
    layer: &PdfLayerReference,
    fonts: &FontSet,
    data: &ResumeData,
    palette: &PdfPalette,
    top: f32,
) {
    let mut col = ColumnWriter {
        layer,
        fonts,
        x: RIGHT_COL_X_MM,
        width: RIGHT_COL_WIDTH_MM,
        y: top,
    };

    let experience = data.qualifying_experience();
    if !experience.is_empty() && col.heading("Experience", palette) {
        for exp in experience {
            col.line(&exp.position, BODY_PT, true, palette.text);
            let mut employer = exp.company.clone();
            if !exp.location.is_empty() && !employer.is_empty() {
                employer = format!("{employer}, {}", exp.location);
            } else if !exp.location.is_empty() {
                employer = exp.location.clone();
            }
            col.line(&employer, SMALL_PT, false, palette.text);
            col.line(
                &date_range(&exp.start_date, &exp.end_date, exp.current_job),
                SMALL_PT,
                false,
                palette.muted,
            );
            if !exp.description.is_empty() {
                col.wrapped(&exp.description, SMALL_PT, false, palette.text);
            }
            col.space(2.5);
        }
        col.space(3.0);
    }

    let projects = data.qualifying_projects();
    if !projects.is_empty() && col.heading("Projects", palette) {
        for project in projects {
            col.line(&project.name, BODY_PT, true, palette.text);
            if !project.technologies.is_empty() {
                col.line(&project.technologies, SMALL_PT, false, palette.muted);
            }
            if !project.description.is_empty() {
                col.wrapped(&project.description, SMALL_PT, false, palette.text);
            }
            col.space(2.5);
        }
        col.space(3.0);
    }

    let achievements = data.qualifying_achievements();
    if !achievements.is_empty() && col.heading("Achievements", palette) {
        for achievement in achievements {
            let mut title = achievement.title.clone();
            let date = format_date(&achievement.date);
            if !date.is_empty() {
                title = format!("{title}  ({date})");
            }
            col.line(&title, BODY_PT, true, palette.text);
            if !achievement.description.is_empty() {
                col.wrapped(&achievement.description, SMALL_PT, false, palette.text);
            }
            col.space(2.0);
        }
        col.space(3.0);
    }

    let references = data.qualifying_references();
    if !references.is_empty() && col.heading("References", palette) {
        for reference in references {
            col.line(&reference.name, BODY_PT, true, palette.text);
            let role = [reference.position.as_str(), reference.company.as_str()]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            col.line(&role, SMALL_PT, false, palette.muted);
            let contact = [reference.email.as_str(), reference.phone.as_str()]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join("  |  ");
            col.line(&contact, SMALL_PT, false, palette.muted);
            col.space(2.0);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Color helpers
// ────────────────────────────────────────────────────────────────────────────

fn set_fill(layer: &PdfLayerReference, (r, g, b): RgbTriple) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

fn set_outline(layer: &PdfLayerReference, (r, g, b): RgbTriple) {
    layer.set_outline_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Experience, PersonalInfo, Proficiency, Skill, SkillGroup};

    fn filled() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                title: "Software Engineer".to_string(),
                email: "ada@example.com".to_string(),
                summary: "Engineer with a decade of systems work.".to_string(),
                ..PersonalInfo::default()
            },
            experience: vec![Experience {
                company: "Analytical Engines Ltd".to_string(),
                position: "Principal Engineer".to_string(),
                start_date: "2020-03".to_string(),
                current_job: true,
                description: "Built the difference engine pipeline end to end, \
                              from punch card ingestion to printed output."
                    .to_string(),
                ..Experience::default()
            }],
            skill_groups: vec![SkillGroup {
                category: "Languages".to_string(),
                skills: vec![Skill {
                    name: "Rust".to_string(),
                    proficiency: Proficiency::Expert,
                }],
            }],
            ..ResumeData::default()
        }
    }

    #[test]
    fn test_build_produces_pdf_bytes_for_every_theme() {
        for theme in ThemeId::ALL {
            let bytes = build_resume_pdf(&filled(), theme).expect("export succeeds");
            assert!(bytes.starts_with(b"%PDF"), "not a PDF for {theme:?}");
            assert!(bytes.len() > 500);
        }
    }

    #[test]
    fn test_build_handles_all_default_data() {
        // Seeded placeholders only: every section is omitted, header is empty,
        // and construction must still succeed.
        let bytes = build_resume_pdf(&ResumeData::default(), ThemeId::Blue).expect("export");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_overflowing_content_still_yields_single_page_pdf() {
        let mut data = filled();
        // Far more entries than a single page can hold.
        for i in 0..80 {
            data.experience.push(Experience {
                company: format!("Company {i}"),
                position: "Engineer".to_string(),
                description: "Did a substantial amount of engineering work.".to_string(),
                ..Experience::default()
            });
        }
        let bytes = build_resume_pdf(&data, ThemeId::Slate).expect("export");
        assert!(bytes.starts_with(b"%PDF"));
        // The page tree must still hold exactly one page.
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 1"), "resume export must stay single-page");
    }
}
