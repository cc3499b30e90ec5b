//! Color themes as token value objects.
//!
//! A theme carries presentational class tokens only: no structure, no
//! behavior. Layouts indirect through these fields and never hardcode a
//! color class, so every layout × theme combination is valid by
//! construction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The five supported color themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Blue,
    Emerald,
    Violet,
    Rose,
    Slate,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Blue,
        ThemeId::Emerald,
        ThemeId::Violet,
        ThemeId::Rose,
        ThemeId::Slate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeId::Blue => "blue",
            ThemeId::Emerald => "emerald",
            ThemeId::Violet => "violet",
            ThemeId::Rose => "rose",
            ThemeId::Slate => "slate",
        }
    }

    /// The token set for this theme.
    pub fn tokens(&self) -> &'static Theme {
        match self {
            ThemeId::Blue => &BLUE,
            ThemeId::Emerald => &EMERALD,
            ThemeId::Violet => &VIOLET,
            ThemeId::Rose => &ROSE,
            ThemeId::Slate => &SLATE,
        }
    }
}

impl FromStr for ThemeId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(ThemeId::Blue),
            "emerald" => Ok(ThemeId::Emerald),
            "violet" => Ok(ThemeId::Violet),
            "rose" => Ok(ThemeId::Rose),
            "slate" => Ok(ThemeId::Slate),
            other => Err(AppError::Validation(format!(
                "unknown theme '{other}' (expected one of: {})",
                ThemeId::ALL.map(|t| t.name()).join(", ")
            ))),
        }
    }
}

/// Presentational tokens consumed by the layout renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Body text.
    pub text: &'static str,
    /// Section headings and the person's name.
    pub heading: &'static str,
    /// Secondary text: dates, locations, labels.
    pub muted: &'static str,
    /// Section and card borders, divider rules.
    pub border: &'static str,
    /// Filled accent surfaces (header bands, sidebars, timeline dots).
    pub accent_bg: &'static str,
    /// Text placed on an accent surface.
    pub accent_text: &'static str,
    /// Skill chips and similar soft-tinted surfaces.
    pub chip_bg: &'static str,
    /// Hyperlinks (website, LinkedIn, GitHub, project links).
    pub link: &'static str,
}

static BLUE: Theme = Theme {
    text: "text-gray-800",
    heading: "text-blue-900",
    muted: "text-gray-500",
    border: "border-blue-200",
    accent_bg: "bg-blue-700",
    accent_text: "text-white",
    chip_bg: "bg-blue-50",
    link: "text-blue-600",
};

static EMERALD: Theme = Theme {
    text: "text-gray-800",
    heading: "text-emerald-900",
    muted: "text-gray-500",
    border: "border-emerald-200",
    accent_bg: "bg-emerald-700",
    accent_text: "text-white",
    chip_bg: "bg-emerald-50",
    link: "text-emerald-600",
};

static VIOLET: Theme = Theme {
    text: "text-gray-800",
    heading: "text-violet-900",
    muted: "text-gray-500",
    border: "border-violet-200",
    accent_bg: "bg-violet-700",
    accent_text: "text-white",
    chip_bg: "bg-violet-50",
    link: "text-violet-600",
};

static ROSE: Theme = Theme {
    text: "text-gray-800",
    heading: "text-rose-900",
    muted: "text-gray-500",
    border: "border-rose-200",
    accent_bg: "bg-rose-700",
    accent_text: "text-white",
    chip_bg: "bg-rose-50",
    link: "text-rose-600",
};

static SLATE: Theme = Theme {
    text: "text-gray-800",
    heading: "text-slate-900",
    muted: "text-gray-500",
    border: "border-slate-300",
    accent_bg: "bg-slate-800",
    accent_text: "text-white",
    chip_bg: "bg-slate-100",
    link: "text-slate-600",
};
