//! PDF export pipeline.
//!
//! Document construction is CPU-bound and must run inside
//! `tokio::task::spawn_blocking`; the async wrappers here are the only
//! entry points callers use. A failed build rejects the whole operation;
//! callers surface the error and never assume partial output exists.

pub mod cover_letter_pdf;
pub mod metrics;
pub mod resume_pdf;
pub mod style;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::errors::AppError;
use crate::models::{CoverLetter, PersonalInfo, ResumeData};
use crate::render::ThemeId;

/// Builds the resume PDF off the async runtime and returns its bytes.
pub async fn export_resume_pdf(data: ResumeData, theme: ThemeId) -> Result<Vec<u8>, AppError> {
    tokio::task::spawn_blocking(move || resume_pdf::build_resume_pdf(&data, theme))
        .await
        .map_err(|e| AppError::Export(format!("export task failed: {e}")))?
}

/// Builds the cover-letter PDF off the async runtime. `personal` is the
/// live read of the resume aggregate's identity block.
pub async fn export_cover_letter_pdf(
    letter: CoverLetter,
    personal: PersonalInfo,
) -> Result<Vec<u8>, AppError> {
    tokio::task::spawn_blocking(move || {
        cover_letter_pdf::build_cover_letter_pdf(&letter, &personal)
    })
    .await
    .map_err(|e| AppError::Export(format!("export task failed: {e}")))?
}

// ────────────────────────────────────────────────────────────────────────────
// Export control
// ────────────────────────────────────────────────────────────────────────────

/// Single-flight guard for exports.
///
/// `try_begin` hands out at most one guard; a second call while a guard is
/// alive returns `None` (the caller's control stays disabled; there is no
/// queueing and no cancellation of an in-flight export). The guard releases
/// the control on drop, on success and failure alike.
#[derive(Default)]
pub struct ExportControl {
    busy: Arc<AtomicBool>,
}

impl ExportControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self) -> Option<ExportGuard> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Some(ExportGuard {
                busy: Arc::clone(&self.busy),
            })
        } else {
            None
        }
    }
}

pub struct ExportGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Filenames
// ────────────────────────────────────────────────────────────────────────────

/// Lowercases and replaces whitespace runs with underscores; strips
/// characters that have no business in a filename. A token that is all
/// punctuation drops out entirely rather than leaving a doubled separator.
fn slug(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// `<name>_resume_<ISO date>.pdf`, falling back to `resume` for an unnamed
/// document.
pub fn resume_filename(personal: &PersonalInfo) -> String {
    let name = slug(&personal.full_name);
    let date = Utc::now().format("%Y-%m-%d");
    if name.is_empty() {
        format!("resume_{date}.pdf")
    } else {
        format!("{name}_resume_{date}.pdf")
    }
}

/// `<name>_<company>_cover_letter_<ISO date>.pdf`, with empty parts
/// dropped.
pub fn cover_letter_filename(personal: &PersonalInfo, company: &str) -> String {
    let date = Utc::now().format("%Y-%m-%d");
    let parts: Vec<String> = [slug(&personal.full_name), slug(company)]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        format!("cover_letter_{date}.pdf")
    } else {
        format!("{}_cover_letter_{date}.pdf", parts.join("_"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
