//! Persisted state containers.
//!
//! Each aggregate lives in its own container with a narrow mutation API.
//! Every mutation is applied in memory first, then serialized whole to the
//! storage backend (failures are logged, never fatal), then announced to
//! subscribers. Two independent named blobs exist: `resume` and
//! `cover_letter`.

pub mod cover_letter;
pub mod resume;
pub mod storage;

pub use cover_letter::CoverLetterStore;
pub use resume::ResumeStore;
pub use storage::{FileStorage, StorageBackend};

pub const RESUME_KEY: &str = "resume";
pub const COVER_LETTER_KEY: &str = "cover_letter";
