mod config;
mod errors;
mod export;
mod models;
mod render;
mod store;

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::export::{
    cover_letter_filename, export_cover_letter_pdf, export_resume_pdf, resume_filename,
    ExportControl,
};
use crate::models::LetterStyle;
use crate::render::{render_document, Layout, ThemeId};
use crate::store::{CoverLetterStore, FileStorage, ResumeStore, StorageBackend};

/// Resume and cover-letter builder: persisted local documents, themed
/// multi-layout HTML previews, and PDF export.
#[derive(Parser)]
#[command(name = "vitae", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the persisted resume and cover-letter aggregates as JSON.
    Show,
    /// Render an HTML preview of the resume.
    Preview {
        #[arg(long, default_value = "standard")]
        layout: Layout,
        #[arg(long, default_value = "blue")]
        theme: ThemeId,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Export the resume as a PDF.
    Export {
        #[arg(long, default_value = "blue")]
        theme: ThemeId,
        /// Output file; derived from the person's name when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Restore an aggregate to its seeded defaults.
    Reset {
        /// Reset the cover letter instead of the resume.
        #[arg(long)]
        letter: bool,
    },
    /// Resume data operations.
    Resume {
        #[command(subcommand)]
        action: ResumeAction,
    },
    /// Cover-letter operations.
    Letter {
        #[command(subcommand)]
        action: LetterAction,
    },
}

#[derive(Subcommand)]
enum ResumeAction {
    /// Shallow-merge a resume JSON document into the live aggregate.
    Import { file: PathBuf },
    /// Replace one section of the resume from a JSON file.
    Set { section: Section, file: PathBuf },
}

/// Top-level resume sections addressable from the command line.
#[derive(Debug, Clone, Copy)]
enum Section {
    PersonalInfo,
    Experience,
    Education,
    SkillGroups,
    Projects,
    Certificates,
    References,
    Achievements,
    Languages,
}

impl Section {
    const ALL: [Section; 9] = [
        Section::PersonalInfo,
        Section::Experience,
        Section::Education,
        Section::SkillGroups,
        Section::Projects,
        Section::Certificates,
        Section::References,
        Section::Achievements,
        Section::Languages,
    ];

    fn name(&self) -> &'static str {
        match self {
            Section::PersonalInfo => "personal-info",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::SkillGroups => "skill-groups",
            Section::Projects => "projects",
            Section::Certificates => "certificates",
            Section::References => "references",
            Section::Achievements => "achievements",
            Section::Languages => "languages",
        }
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.name() == lowered)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "unknown section '{s}' (expected one of: {})",
                    Section::ALL.map(|section| section.name()).join(", ")
                ))
            })
    }
}

#[derive(Subcommand)]
enum LetterAction {
    /// Export the cover letter as a PDF (style preset comes from the
    /// letter itself).
    Export {
        /// Output file; derived from name and company when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Set the letter's style preset.
    Style { style: LetterStyle },
    /// Save a named snapshot of the live letter.
    Save { name: String },
    /// List saved snapshots.
    List,
    /// Replace the live letter with a saved snapshot.
    Load { id: String },
    /// Delete a saved snapshot.
    Delete { id: String },
    /// Shallow-merge a cover-letter JSON document into the live letter.
    Import { file: PathBuf },
    /// Write the live letter as interchange JSON.
    Dump {
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("vitae v{}", env!("CARGO_PKG_VERSION"));
    info!("Data dir: {}", config.data_dir.display());

    let storage: Arc<dyn StorageBackend> = Arc::new(FileStorage::open(config.data_dir.clone())?);

    match cli.command {
        Command::Show => {
            let resume = open_resume(storage.clone());
            let letters = open_letters(storage);
            println!("{}", serde_json::to_string_pretty(resume.data())?);
            println!("{}", serde_json::to_string_pretty(letters.letter())?);
        }
        Command::Preview { layout, theme, out } => {
            let resume = open_resume(storage);
            let html = render_document(resume.data(), layout, theme);
            write_output(out, html.as_bytes(), "preview").await?;
        }
        Command::Export { theme, out } => {
            let resume = open_resume(storage);
            let control = ExportControl::new();
            let Some(_guard) = control.try_begin() else {
                eprintln!("An export is already in progress");
                std::process::exit(1);
            };
            match export_resume_pdf(resume.data().clone(), theme).await {
                Ok(bytes) => {
                    let path =
                        out.unwrap_or_else(|| PathBuf::from(resume_filename(&resume.data().personal_info)));
                    tokio::fs::write(&path, &bytes).await?;
                    println!("Saved {}", path.display());
                }
                Err(e) => {
                    eprintln!("Export failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Reset { letter } => {
            if letter {
                let mut letters = open_letters(storage);
                letters.reset();
                println!("Cover letter reset to defaults");
            } else {
                let mut resume = open_resume(storage);
                resume.reset();
                println!("Resume reset to defaults");
            }
        }
        Command::Resume { action } => match action {
            ResumeAction::Import { file } => {
                let raw = tokio::fs::read_to_string(&file).await?;
                let mut resume = open_resume(storage);
                if let Err(e) = resume.import_json(&raw) {
                    eprintln!("Import failed: {e}");
                    std::process::exit(1);
                }
                println!("Imported {}", file.display());
            }
            ResumeAction::Set { section, file } => {
                let raw = tokio::fs::read_to_string(&file).await?;
                let mut resume = open_resume(storage);
                if let Err(e) = set_section(&mut resume, section, &raw) {
                    eprintln!("Set failed: {e}");
                    std::process::exit(1);
                }
                println!("Updated {} from {}", section.name(), file.display());
            }
        },
        Command::Letter { action } => run_letter(action, storage).await?,
    }

    Ok(())
}

fn open_resume(storage: Arc<dyn StorageBackend>) -> ResumeStore {
    let mut store = ResumeStore::open(storage);
    store.subscribe(Box::new(|_| debug!("Resume aggregate committed")));
    store
}

fn open_letters(storage: Arc<dyn StorageBackend>) -> CoverLetterStore {
    let mut store = CoverLetterStore::open(storage);
    store.subscribe(Box::new(|_| debug!("Cover-letter state committed")));
    store
}

/// Parses `raw` as the section's typed shape and swaps it into the aggregate.
fn set_section(resume: &mut ResumeStore, section: Section, raw: &str) -> Result<(), AppError> {
    let bad = |e: serde_json::Error| {
        AppError::Malformed(format!("does not match the {} shape: {e}", section.name()))
    };
    match section {
        Section::PersonalInfo => resume.update_personal_info(serde_json::from_str(raw).map_err(bad)?),
        Section::Experience => resume.update_experience(serde_json::from_str(raw).map_err(bad)?),
        Section::Education => resume.update_education(serde_json::from_str(raw).map_err(bad)?),
        Section::SkillGroups => resume.update_skill_groups(serde_json::from_str(raw).map_err(bad)?),
        Section::Projects => resume.update_projects(serde_json::from_str(raw).map_err(bad)?),
        Section::Certificates => resume.update_certificates(serde_json::from_str(raw).map_err(bad)?),
        Section::References => resume.update_references(serde_json::from_str(raw).map_err(bad)?),
        Section::Achievements => resume.update_achievements(serde_json::from_str(raw).map_err(bad)?),
        Section::Languages => resume.update_languages(serde_json::from_str(raw).map_err(bad)?),
    }
    Ok(())
}

async fn run_letter(action: LetterAction, storage: Arc<dyn StorageBackend>) -> Result<()> {
    match action {
        LetterAction::Export { out } => {
            // Live read of the resume identity block for the sender lines.
            let resume = open_resume(storage.clone());
            let letters = open_letters(storage);
            let personal = resume.data().personal_info.clone();
            let letter = letters.letter().clone();
            let company = letter.company_name.clone();

            let control = ExportControl::new();
            let Some(_guard) = control.try_begin() else {
                eprintln!("An export is already in progress");
                std::process::exit(1);
            };
            match export_cover_letter_pdf(letter, personal).await {
                Ok(bytes) => {
                    let path = out.unwrap_or_else(|| {
                        PathBuf::from(cover_letter_filename(
                            &resume.data().personal_info,
                            &company,
                        ))
                    });
                    tokio::fs::write(&path, &bytes).await?;
                    println!("Saved {}", path.display());
                }
                Err(e) => {
                    eprintln!("Export failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        LetterAction::Style { style } => {
            let mut letters = open_letters(storage);
            letters.update_style(style);
            println!("Letter style set to {}", style.name());
        }
        LetterAction::Save { name } => {
            let mut letters = open_letters(storage);
            let id = letters.save(&name);
            println!("Saved snapshot {id} ({name})");
        }
        LetterAction::List => {
            let letters = open_letters(storage);
            if letters.saved().is_empty() {
                println!("No saved cover letters");
            }
            for snapshot in letters.saved() {
                println!("{}  {}  ({})", snapshot.id, snapshot.name, snapshot.saved_at);
            }
        }
        LetterAction::Load { id } => {
            let mut letters = open_letters(storage);
            let known = letters.saved().iter().any(|s| s.id == id);
            letters.load(&id);
            if known {
                println!("Loaded snapshot {id}");
            } else {
                // Store semantics: an unknown id is a silent miss.
                println!("No snapshot {id}; live letter unchanged");
            }
        }
        LetterAction::Delete { id } => {
            let mut letters = open_letters(storage);
            letters.delete(&id);
            println!("Deleted snapshot {id} (if it existed)");
        }
        LetterAction::Import { file } => {
            let raw = tokio::fs::read_to_string(&file).await?;
            let mut letters = open_letters(storage);
            if let Err(e) = letters.import_json(&raw) {
                eprintln!("Import failed: {e}");
                std::process::exit(1);
            }
            println!("Imported {}", file.display());
        }
        LetterAction::Dump { out } => {
            let letters = open_letters(storage);
            let json = letters.export_json()?;
            write_output(out, json.as_bytes(), "cover letter").await?;
        }
    }
    Ok(())
}


async fn write_output(out: Option<PathBuf>, bytes: &[u8], what: &str) -> Result<()> {
    match out {
        Some(path) => {
            tokio::fs::write(&path, bytes).await?;
            println!("Saved {what} to {}", path.display());
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(bytes)?;
        }
    }
    Ok(())
}
