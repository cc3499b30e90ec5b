//! Durable blob storage behind the state containers.
//!
//! The backend is a trait so stores stay testable without touching the
//! filesystem. `FileStorage` keeps one JSON file per named blob and writes
//! atomically (write `.tmp`, then rename).

#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
#[cfg(test)]
use std::sync::Mutex;

use crate::errors::AppError;

/// Whole-blob read/write. Keys are short stable names (`resume`,
/// `cover_letter`); values are complete JSON documents.
pub trait StorageBackend: Send + Sync {
    /// Returns the stored blob, or `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// File-backed storage
// ────────────────────────────────────────────────────────────────────────────

/// One `<key>.json` file per blob under a data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates the data directory if needed.
    pub fn open(dir: PathBuf) -> Result<Self, AppError> {
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::Storage(format!("cannot create {}: {e}", dir.display())))?;
        Ok(FileStorage { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)
            .map_err(|e| AppError::Storage(format!("cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .map_err(|e| AppError::Storage(format!("cannot rename to {}: {e}", path.display())))?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory storage (test double)
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a blob, e.g. to simulate a previous session.
    pub fn seed(&self, key: &str, value: &str) {
        self.blobs
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .blobs
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.blobs
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend whose writes always fail; exercises the "persistence failed,
/// memory stays authoritative" path.
#[cfg(test)]
pub struct BrokenStorage;

#[cfg(test)]
impl StorageBackend for BrokenStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, AppError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::Storage("quota exceeded".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.read("resume").expect("read").is_none());
        storage.write("resume", "{}").expect("write");
        assert_eq!(storage.read("resume").expect("read").as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path().to_path_buf()).expect("open");
        assert!(storage.read("resume").expect("read").is_none());
        storage.write("resume", r#"{"a":1}"#).expect("write");
        assert_eq!(
            storage.read("resume").expect("read").as_deref(),
            Some(r#"{"a":1}"#)
        );
        // A second write replaces the blob wholesale.
        storage.write("resume", r#"{"a":2}"#).expect("write");
        assert_eq!(
            storage.read("resume").expect("read").as_deref(),
            Some(r#"{"a":2}"#)
        );
    }

    #[test]
    fn test_file_storage_keys_are_independent_blobs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path().to_path_buf()).expect("open");
        storage.write("resume", "1").expect("write");
        storage.write("cover_letter", "2").expect("write");
        assert_eq!(storage.read("resume").expect("read").as_deref(), Some("1"));
        assert_eq!(
            storage.read("cover_letter").expect("read").as_deref(),
            Some("2")
        );
        assert!(dir.path().join("resume.json").exists());
        assert!(dir.path().join("cover_letter.json").exists());
    }

    #[test]
    fn test_file_storage_leaves_no_tmp_file_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path().to_path_buf()).expect("open");
        storage.write("resume", "{}").expect("write");
        assert!(!dir.path().join("resume.json.tmp").exists());
    }
}
