//! Multi-layout preview renderer.
//!
//! Four layout strategies are polymorphic over one contract: given the
//! resume aggregate and a theme token set, produce a visual tree. Layout and
//! theme are independent axes; any of the 4 × 5 combinations renders, with
//! empty sections omitted wholesale and absent optional fields suppressing
//! only their own sub-block.

pub mod compact;
pub mod elegant;
pub mod format;
pub mod modern;
pub mod node;
pub mod standard;
pub mod theme;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ResumeData;

pub use node::Node;
pub use theme::{Theme, ThemeId};

/// The four layout strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Standard,
    Compact,
    Elegant,
    Modern,
}

impl Layout {
    pub const ALL: [Layout; 4] = [
        Layout::Standard,
        Layout::Compact,
        Layout::Elegant,
        Layout::Modern,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Layout::Standard => "standard",
            Layout::Compact => "compact",
            Layout::Elegant => "elegant",
            Layout::Modern => "modern",
        }
    }

    fn renderer(&self) -> &'static dyn LayoutRenderer {
        match self {
            Layout::Standard => &standard::StandardLayout,
            Layout::Compact => &compact::CompactLayout,
            Layout::Elegant => &elegant::ElegantLayout,
            Layout::Modern => &modern::ModernLayout,
        }
    }
}

impl FromStr for Layout {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Layout::Standard),
            "compact" => Ok(Layout::Compact),
            "elegant" => Ok(Layout::Elegant),
            "modern" => Ok(Layout::Modern),
            other => Err(AppError::Validation(format!(
                "unknown layout '{other}' (expected one of: {})",
                Layout::ALL.map(|l| l.name()).join(", ")
            ))),
        }
    }
}

/// The single rendering contract every layout implements.
pub trait LayoutRenderer: Sync {
    fn render(&self, data: &ResumeData, theme: &Theme) -> Node;
}

/// Renders `data` with the chosen layout and theme.
pub fn render(data: &ResumeData, layout: Layout, theme: ThemeId) -> Node {
    layout.renderer().render(data, theme.tokens())
}

/// Wraps a rendered tree in a minimal standalone HTML document.
pub fn render_document(data: &ResumeData, layout: Layout, theme: ThemeId) -> String {
    let body = render(data, layout, theme).to_html();
    let title = if data.personal_info.full_name.is_empty() {
        "Resume".to_string()
    } else {
        data.personal_info.full_name.clone()
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <script src=\"https://cdn.tailwindcss.com\"></script>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Education, Experience, PersonalInfo, Proficiency, Skill, SkillGroup,
    };

    /// A resume with real content in the three core sections and nothing
    /// optional filled in.
    fn minimal_filled() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                title: "Software Engineer".to_string(),
                email: "ada@example.com".to_string(),
                ..PersonalInfo::default()
            },
            experience: vec![Experience {
                company: "Analytical Engines Ltd".to_string(),
                position: "Principal Engineer".to_string(),
                start_date: "2020-03".to_string(),
                end_date: "2023-06".to_string(),
                current_job: true,
                description: "Designed the difference engine pipeline.".to_string(),
                ..Experience::default()
            }],
            education: vec![Education {
                school: "University of London".to_string(),
                degree: "BSc".to_string(),
                field_of_study: "Mathematics".to_string(),
                start_date: "2012-09".to_string(),
                end_date: "2015-06".to_string(),
                ..Education::default()
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
    fn test_all_combinations_render_default_data_without_panic() {
        let data = ResumeData::default();
        for layout in Layout::ALL {
            for theme in ThemeId::ALL {
                let html = render(&data, layout, theme).to_html();
                assert!(
                    !html.is_empty(),
                    "{}/{} produced empty output",
                    layout.name(),
                    theme.name()
                );
            }
        }
    }

    #[test]
    fn test_default_data_renders_no_section_headings() {
        // Seeded placeholders are not qualifying: no section may render an
        // empty heading, in any layout.
        let data = ResumeData::default();
        for layout in Layout::ALL {
            let tree = render(&data, layout, ThemeId::Blue);
            for heading in [
                "Experience",
                "Education",
                "Skills",
                "Projects",
                "Certificates",
                "References",
                "Achievements",
                "Languages",
            ] {
                assert!(
                    !tree.contains_text(heading),
                    "{} rendered empty section '{heading}'",
                    layout.name()
                );
            }
        }
    }

    #[test]
    fn test_filled_sections_appear_in_every_layout() {
        let data = minimal_filled();
        for layout in Layout::ALL {
            let tree = render(&data, layout, ThemeId::Emerald);
            assert!(tree.contains_text("Experience"), "{}", layout.name());
            assert!(tree.contains_text("Education"), "{}", layout.name());
            assert!(tree.contains_text("Skills"), "{}", layout.name());
            assert!(!tree.contains_text("Projects"), "{}", layout.name());
        }
    }

    #[test]
    fn test_current_job_renders_present_and_ignores_end_date() {
        let data = minimal_filled();
        for layout in Layout::ALL {
            let html = render(&data, layout, ThemeId::Blue).to_html();
            assert!(
                html.contains("Present"),
                "{} must render Present",
                layout.name()
            );
            assert!(
                !html.contains("Jun 2023"),
                "{} must ignore the stored end date",
                layout.name()
            );
        }
    }

    #[test]
    fn test_absent_gpa_suppresses_only_its_sub_block() {
        let mut data = minimal_filled();
        data.education[0].gpa = String::new();
        for layout in Layout::ALL {
            let html = render(&data, layout, ThemeId::Slate).to_html();
            assert!(!html.contains("GPA"), "{}", layout.name());
            assert!(html.contains("University of London"), "{}", layout.name());
        }

        data.education[0].gpa = "3.9".to_string();
        let html = render(&data, Layout::Standard, ThemeId::Slate).to_html();
        assert!(html.contains("GPA: 3.9"));
    }

    #[test]
    fn test_layouts_take_all_color_from_theme_tokens() {
        // Rendering the same data under two themes must differ only in
        // theme tokens; a layout hardcoding its own palette would leak the
        // same accent class into both.
        let data = minimal_filled();
        for layout in Layout::ALL {
            let blue = render(&data, layout, ThemeId::Blue).to_html();
            let rose = render(&data, layout, ThemeId::Rose).to_html();
            assert!(!blue.contains("rose"), "{}", layout.name());
            assert!(!rose.contains("blue"), "{}", layout.name());
        }
    }

    #[test]
    fn test_render_document_wraps_html_shell() {
        let doc = render_document(&minimal_filled(), Layout::Standard, ThemeId::Blue);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Ada Lovelace</title>"));
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("modern".parse::<Layout>().expect("parses"), Layout::Modern);
        assert!("brutalist".parse::<Layout>().is_err());
    }
}
