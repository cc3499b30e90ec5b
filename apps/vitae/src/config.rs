use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing here is required: the data directory falls back to the platform
/// data dir, and `RUST_LOG` defaults to `info`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted document blobs (`resume.json`,
    /// `cover_letter.json`).
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = match std::env::var("VITAE_DATA_DIR") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir().context("Could not resolve a platform data directory")?,
        };

        Ok(Config {
            data_dir,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("vitae"))
}
