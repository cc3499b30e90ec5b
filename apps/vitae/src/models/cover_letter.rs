//! Cover-letter aggregate and its saved-snapshot record.
//!
//! The cover letter has an independent lifecycle from the resume aggregate;
//! at render/export time it borrows the resume's `PersonalInfo` read-only
//! for the sender block.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Closed set of letter style presets. A preset selects font family and
/// decorative border treatment only; the content structure is identical
/// across all four.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStyle {
    #[default]
    Formal,
    Modern,
    Creative,
    Simple,
}

impl LetterStyle {
    pub const ALL: [LetterStyle; 4] = [
        LetterStyle::Formal,
        LetterStyle::Modern,
        LetterStyle::Creative,
        LetterStyle::Simple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LetterStyle::Formal => "formal",
            LetterStyle::Modern => "modern",
            LetterStyle::Creative => "creative",
            LetterStyle::Simple => "simple",
        }
    }
}

impl FromStr for LetterStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "formal" => Ok(LetterStyle::Formal),
            "modern" => Ok(LetterStyle::Modern),
            "creative" => Ok(LetterStyle::Creative),
            "simple" => Ok(LetterStyle::Simple),
            other => Err(AppError::Validation(format!(
                "unknown letter style '{other}' (expected one of: {})",
                LetterStyle::ALL.map(|s| s.name()).join(", ")
            ))),
        }
    }
}

/// The cover-letter aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetter {
    pub recipient_name: String,
    pub recipient_title: String,
    pub company_name: String,
    pub company_address: String,
    pub date: String,
    /// Optional subject line; empty string suppresses the block.
    pub subject: String,
    pub greeting: String,
    pub introduction: String,
    pub body_paragraphs: Vec<String>,
    pub conclusion: String,
    pub closing: String,
    pub template: LetterStyle,
}

impl Default for CoverLetter {
    fn default() -> Self {
        CoverLetter {
            recipient_name: String::new(),
            recipient_title: String::new(),
            company_name: String::new(),
            company_address: String::new(),
            date: String::new(),
            subject: String::new(),
            greeting: "Dear Hiring Manager,".to_string(),
            introduction: String::new(),
            body_paragraphs: vec![String::new()],
            conclusion: String::new(),
            closing: "Sincerely,".to_string(),
            template: LetterStyle::Formal,
        }
    }
}

impl CoverLetter {
    /// Body paragraphs with actual text, in input order.
    pub fn filled_paragraphs(&self) -> impl Iterator<Item = &String> {
        self.body_paragraphs.iter().filter(|p| !p.trim().is_empty())
    }
}

/// A point-in-time copy of a cover letter. Value semantics: mutations to the
/// live aggregate never reach a saved snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedCoverLetter {
    pub id: String,
    pub name: String,
    pub letter: CoverLetter,
    pub saved_at: String,
}

impl Default for SavedCoverLetter {
    fn default() -> Self {
        SavedCoverLetter {
            id: String::new(),
            name: String::new(),
            letter: CoverLetter::default(),
            saved_at: String::new(),
        }
    }
}

/// Everything persisted under the cover-letter blob: the live aggregate plus
/// the saved-snapshot list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterState {
    pub letter: CoverLetter,
    pub saved: Vec<SavedCoverLetter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_letter_has_greeting_and_closing() {
        let letter = CoverLetter::default();
        assert_eq!(letter.greeting, "Dear Hiring Manager,");
        assert_eq!(letter.closing, "Sincerely,");
        assert_eq!(letter.template, LetterStyle::Formal);
        assert_eq!(letter.body_paragraphs.len(), 1);
    }

    #[test]
    fn test_filled_paragraphs_skips_blank_entries() {
        let letter = CoverLetter {
            body_paragraphs: vec![
                "First.".to_string(),
                "   ".to_string(),
                String::new(),
                "Second.".to_string(),
            ],
            ..CoverLetter::default()
        };
        let filled: Vec<&String> = letter.filled_paragraphs().collect();
        assert_eq!(filled.len(), 2);
        assert_eq!(filled[0], "First.");
        assert_eq!(filled[1], "Second.");
    }

    #[test]
    fn test_letter_style_from_str() {
        assert_eq!(
            "Creative".parse::<LetterStyle>().expect("parses"),
            LetterStyle::Creative
        );
        assert!("gothic".parse::<LetterStyle>().is_err());
    }

    #[test]
    fn test_letter_style_serializes_lowercase() {
        let json = serde_json::to_string(&LetterStyle::Creative).expect("serialize");
        assert_eq!(json, r#""creative""#);
        let back: LetterStyle = serde_json::from_str(r#""simple""#).expect("deserialize");
        assert_eq!(back, LetterStyle::Simple);
    }

    #[test]
    fn test_snapshot_is_a_value_copy() {
        let mut live = CoverLetter {
            company_name: "Acme".to_string(),
            ..CoverLetter::default()
        };
        let snapshot = SavedCoverLetter {
            id: "1".to_string(),
            name: "Acme Draft".to_string(),
            letter: live.clone(),
            saved_at: "2026-08-25".to_string(),
        };
        live.company_name = "Globex".to_string();
        assert_eq!(snapshot.letter.company_name, "Acme");
    }
}
