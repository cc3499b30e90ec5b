//! Resume state container.

use std::sync::Arc;

use tracing::{error, warn};

use crate::models::{
    Achievement, Certificate, Education, Experience, Language, PersonalInfo, Project, Reference,
    ResumeData, SkillGroup,
};
use crate::store::storage::StorageBackend;
use crate::store::RESUME_KEY;

type Subscriber = Box<dyn Fn(&ResumeData) + Send + Sync>;

/// Single writer of the resume aggregate. Mutations replace one top-level
/// field at a time, persist the whole aggregate, then notify subscribers.
pub struct ResumeStore {
    data: ResumeData,
    storage: Arc<dyn StorageBackend>,
    subscribers: Vec<Subscriber>,
}

impl ResumeStore {
    /// Loads previous state from storage, falling back to seeded defaults on
    /// absence or parse failure. Neither case blocks startup; a corrupt blob
    /// is logged and discarded.
    pub fn open(storage: Arc<dyn StorageBackend>) -> Self {
        let data = match storage.read(RESUME_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<ResumeData>(&blob) {
                Ok(data) => data,
                Err(e) => {
                    warn!("Discarding corrupt resume blob: {e}");
                    ResumeData::default()
                }
            },
            Ok(None) => ResumeData::default(),
            Err(e) => {
                warn!("Resume blob unreadable, starting from defaults: {e}");
                ResumeData::default()
            }
        };

        ResumeStore {
            data,
            storage,
            subscribers: Vec::new(),
        }
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    /// Registers an observer invoked after every committed mutation.
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    pub fn update_personal_info(&mut self, value: PersonalInfo) {
        self.data.personal_info = value;
        self.commit();
    }

    pub fn update_experience(&mut self, value: Vec<Experience>) {
        self.data.experience = value;
        self.commit();
    }

    pub fn update_education(&mut self, value: Vec<Education>) {
        self.data.education = value;
        self.commit();
    }

    pub fn update_skill_groups(&mut self, value: Vec<SkillGroup>) {
        self.data.skill_groups = value;
        self.commit();
    }

    pub fn update_projects(&mut self, value: Vec<Project>) {
        self.data.projects = value;
        self.commit();
    }

    pub fn update_certificates(&mut self, value: Vec<Certificate>) {
        self.data.certificates = value;
        self.commit();
    }

    pub fn update_references(&mut self, value: Vec<Reference>) {
        self.data.references = value;
        self.commit();
    }

    pub fn update_achievements(&mut self, value: Vec<Achievement>) {
        self.data.achievements = value;
        self.commit();
    }

    pub fn update_languages(&mut self, value: Vec<Language>) {
        self.data.languages = value;
        self.commit();
    }

    /// Replaces the whole aggregate. The CLI import path and `reset` both
    /// land here; form-style partial updates go through the `update_*`
    /// methods above.
    pub fn replace(&mut self, value: ResumeData) {
        self.data = value;
        self.commit();
    }

    /// Parses `raw` and shallow-merges its top-level keys over the live
    /// aggregate, mirroring the cover-letter interchange semantics.
    /// Malformed input aborts with prior state intact.
    pub fn import_json(&mut self, raw: &str) -> Result<(), crate::errors::AppError> {
        use crate::errors::AppError;

        let incoming: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| AppError::Malformed(format!("invalid JSON: {e}")))?;
        let serde_json::Value::Object(incoming) = incoming else {
            return Err(AppError::Malformed(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        let mut merged = match serde_json::to_value(&self.data) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                return Err(AppError::Malformed(
                    "live aggregate did not serialize to an object".to_string(),
                ))
            }
        };
        for (key, value) in incoming {
            merged.insert(key, value);
        }

        let data: ResumeData = serde_json::from_value(serde_json::Value::Object(merged))
            .map_err(|e| AppError::Malformed(format!("does not match the resume shape: {e}")))?;
        self.replace(data);
        Ok(())
    }

    /// Restores the seeded default aggregate.
    pub fn reset(&mut self) {
        self.replace(ResumeData::default());
    }

    /// Persist then notify. The in-memory aggregate is already updated when
    /// this runs; a failed write degrades durability only.
    fn commit(&mut self) {
        match serde_json::to_string(&self.data) {
            Ok(blob) => {
                if let Err(e) = self.storage.write(RESUME_KEY, &blob) {
                    warn!("Resume persistence failed, in-memory state kept: {e}");
                }
            }
            Err(e) => error!("Resume serialization failed: {e}"),
        }
        for subscriber in &self.subscribers {
            subscriber(&self.data);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::store::storage::{BrokenStorage, MemoryStorage};

    fn memory_store() -> (Arc<MemoryStorage>, ResumeStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = ResumeStore::open(storage.clone() as Arc<dyn StorageBackend>);
        (storage, store)
    }

    #[test]
    fn test_open_without_blob_yields_defaults() {
        let (_, store) = memory_store();
        assert_eq!(*store.data(), ResumeData::default());
    }

    #[test]
    fn test_update_replaces_only_its_section() {
        let (_, mut store) = memory_store();
        store.update_personal_info(PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            ..PersonalInfo::default()
        });
        store.update_experience(vec![Experience {
            company: "Analytical Engines Ltd".to_string(),
            ..Experience::default()
        }]);

        assert_eq!(store.data().personal_info.full_name, "Ada Lovelace");
        assert_eq!(store.data().experience[0].company, "Analytical Engines Ltd");
        // Untouched sections keep their seeded placeholders.
        assert_eq!(store.data().education.len(), 1);
    }

    #[test]
    fn test_every_mutation_persists_whole_aggregate() {
        let (storage, mut store) = memory_store();
        store.update_personal_info(PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            ..PersonalInfo::default()
        });

        let blob = storage
            .read(RESUME_KEY)
            .expect("read")
            .expect("blob written");
        let persisted: ResumeData = serde_json::from_str(&blob).expect("valid JSON");
        assert_eq!(persisted, *store.data());
    }

    #[test]
    fn test_reopen_restores_persisted_state() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut store = ResumeStore::open(storage.clone() as Arc<dyn StorageBackend>);
            store.update_personal_info(PersonalInfo {
                full_name: "Grace Hopper".to_string(),
                ..PersonalInfo::default()
            });
        }
        let store = ResumeStore::open(storage as Arc<dyn StorageBackend>);
        assert_eq!(store.data().personal_info.full_name, "Grace Hopper");
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        storage.seed(RESUME_KEY, "{not json at all");
        let store = ResumeStore::open(storage as Arc<dyn StorageBackend>);
        assert_eq!(*store.data(), ResumeData::default());
    }

    #[test]
    fn test_persistence_failure_keeps_memory_authoritative() {
        let mut store = ResumeStore::open(Arc::new(BrokenStorage) as Arc<dyn StorageBackend>);
        store.update_personal_info(PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            ..PersonalInfo::default()
        });
        assert_eq!(store.data().personal_info.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_reset_twice_is_idempotent() {
        let (_, mut store) = memory_store();
        store.update_languages(vec![crate::models::Language {
            name: "French".to_string(),
            fluency: "Fluent".to_string(),
        }]);
        store.reset();
        let first = store.data().clone();
        store.reset();
        assert_eq!(first, *store.data());
        assert_eq!(first, ResumeData::default());
    }

    #[test]
    fn test_import_json_merges_only_present_keys() {
        let (_, mut store) = memory_store();
        store.update_personal_info(PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            ..PersonalInfo::default()
        });
        store
            .import_json(r#"{"projects": [{"name": "Engine"}]}"#)
            .expect("import");
        assert_eq!(store.data().projects.len(), 1);
        assert_eq!(store.data().projects[0].name, "Engine");
        // personalInfo was not in the payload: untouched.
        assert_eq!(store.data().personal_info.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_import_json_rejects_malformed_payload() {
        let (_, mut store) = memory_store();
        assert!(store.import_json("][").is_err());
        assert!(store.import_json(r#""just a string""#).is_err());
        assert_eq!(*store.data(), ResumeData::default());
    }

    #[test]
    fn test_subscribers_fire_per_mutation() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let (_, mut store) = memory_store();
        store.subscribe(Box::new(|_| {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }));
        store.update_projects(Vec::new());
        store.reset();
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }
}
