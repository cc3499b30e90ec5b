//! Cover-letter state container: the live aggregate, its saved snapshots,
//! and the JSON interchange surface.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CoverLetter, CoverLetterState, LetterStyle, SavedCoverLetter};
use crate::store::storage::StorageBackend;
use crate::store::COVER_LETTER_KEY;

type Subscriber = Box<dyn Fn(&CoverLetterState) + Send + Sync>;

pub struct CoverLetterStore {
    state: CoverLetterState,
    storage: Arc<dyn StorageBackend>,
    subscribers: Vec<Subscriber>,
}

impl CoverLetterStore {
    /// Loads previous state (live letter + snapshot list) or falls back to
    /// defaults; a corrupt blob is logged and discarded.
    pub fn open(storage: Arc<dyn StorageBackend>) -> Self {
        let state = match storage.read(COVER_LETTER_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<CoverLetterState>(&blob) {
                Ok(state) => state,
                Err(e) => {
                    warn!("Discarding corrupt cover-letter blob: {e}");
                    CoverLetterState::default()
                }
            },
            Ok(None) => CoverLetterState::default(),
            Err(e) => {
                warn!("Cover-letter blob unreadable, starting from defaults: {e}");
                CoverLetterState::default()
            }
        };

        CoverLetterStore {
            state,
            storage,
            subscribers: Vec::new(),
        }
    }

    pub fn letter(&self) -> &CoverLetter {
        &self.state.letter
    }

    pub fn saved(&self) -> &[SavedCoverLetter] {
        &self.state.saved
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Replaces the live letter wholesale (the form layer edits whole
    /// aggregates, not individual fields).
    pub fn update(&mut self, letter: CoverLetter) {
        self.state.letter = letter;
        self.commit();
    }

    pub fn update_style(&mut self, style: LetterStyle) {
        self.state.letter.template = style;
        self.commit();
    }

    /// Restores the default letter. Saved snapshots survive a reset.
    pub fn reset(&mut self) {
        self.update(CoverLetter::default());
    }

    // ── snapshots ───────────────────────────────────────────────────────────

    /// Appends a named snapshot of the live letter and returns its id.
    ///
    /// Ids are millisecond timestamps (so snapshots sort by save time); two
    /// saves in the same millisecond fall back to a random id.
    pub fn save(&mut self, name: &str) -> String {
        let mut id = Utc::now().timestamp_millis().to_string();
        if self.state.saved.iter().any(|s| s.id == id) {
            id = Uuid::new_v4().to_string();
        }
        self.state.saved.push(SavedCoverLetter {
            id: id.clone(),
            name: name.to_string(),
            letter: self.state.letter.clone(),
            saved_at: Utc::now().to_rfc3339(),
        });
        self.commit();
        id
    }

    /// Replaces the live letter with a stored snapshot. An unknown id is a
    /// silent miss, not an error.
    pub fn load(&mut self, id: &str) {
        let Some(letter) = self
            .state
            .saved
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.letter.clone())
        else {
            return;
        };
        self.update(letter);
    }

    /// Removes a snapshot by id. Idempotent: deleting an absent id is a no-op
    /// (the removal still commits only when something changed).
    pub fn delete(&mut self, id: &str) {
        let before = self.state.saved.len();
        self.state.saved.retain(|s| s.id != id);
        if self.state.saved.len() != before {
            self.commit();
        }
    }

    // ── JSON interchange ────────────────────────────────────────────────────

    /// The live letter, serialized verbatim.
    pub fn export_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.state.letter)?)
    }

    /// Parses `raw` and shallow-merges its top-level keys over the live
    /// letter. Malformed JSON, a non-object payload, or keys that do not fit
    /// the aggregate shape abort the import with prior state intact.
    pub fn import_json(&mut self, raw: &str) -> Result<(), AppError> {
        let incoming: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| AppError::Malformed(format!("invalid JSON: {e}")))?;
        let serde_json::Value::Object(incoming) = incoming else {
            return Err(AppError::Malformed(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        let mut merged = match serde_json::to_value(&self.state.letter) {
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

        let letter: CoverLetter = serde_json::from_value(serde_json::Value::Object(merged))
            .map_err(|e| AppError::Malformed(format!("does not match the cover-letter shape: {e}")))?;
        self.update(letter);
        Ok(())
    }

    fn commit(&mut self) {
        match serde_json::to_string(&self.state) {
            Ok(blob) => {
                if let Err(e) = self.storage.write(COVER_LETTER_KEY, &blob) {
                    warn!("Cover-letter persistence failed, in-memory state kept: {e}");
                }
            }
            Err(e) => error!("Cover-letter serialization failed: {e}"),
        }
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::storage::MemoryStorage;

    fn new_store() -> CoverLetterStore {
        CoverLetterStore::open(Arc::new(MemoryStorage::new()) as Arc<dyn StorageBackend>)
    }

    fn acme_letter() -> CoverLetter {
        CoverLetter {
            company_name: "Acme".to_string(),
            introduction: "I am writing to apply.".to_string(),
            ..CoverLetter::default()
        }
    }

    #[test]
    fn test_save_then_mutate_leaves_snapshot_unchanged() {
        let mut store = new_store();
        store.update(acme_letter());
        let id = store.save("Acme Draft");

        let mut live = store.letter().clone();
        live.company_name = "Globex".to_string();
        store.update(live);

        let snapshot = store
            .saved()
            .iter()
            .find(|s| s.id == id)
            .expect("snapshot exists");
        assert_eq!(snapshot.name, "Acme Draft");
        assert_eq!(snapshot.letter.company_name, "Acme");
        assert_eq!(store.letter().company_name, "Globex");
    }

    #[test]
    fn test_load_replaces_live_letter() {
        let mut store = new_store();
        store.update(acme_letter());
        let id = store.save("Acme Draft");
        store.reset();
        assert!(store.letter().company_name.is_empty());

        store.load(&id);
        assert_eq!(store.letter().company_name, "Acme");
    }

    #[test]
    fn test_load_unknown_id_is_a_silent_miss() {
        let mut store = new_store();
        store.update(acme_letter());
        store.load("no-such-id");
        assert_eq!(store.letter().company_name, "Acme");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = new_store();
        let id = store.save("Draft");
        assert_eq!(store.saved().len(), 1);
        store.delete(&id);
        assert!(store.saved().is_empty());
        store.delete(&id); // second delete: no-op
        assert!(store.saved().is_empty());
    }

    #[test]
    fn test_update_style_changes_preset_only() {
        let mut store = new_store();
        store.update(acme_letter());
        store.update_style(LetterStyle::Creative);
        assert_eq!(store.letter().template, LetterStyle::Creative);
        assert_eq!(store.letter().company_name, "Acme");
    }

    #[test]
    fn test_saved_snapshots_survive_reset() {
        let mut store = new_store();
        store.update(acme_letter());
        store.save("Draft");
        store.reset();
        store.reset();
        assert_eq!(store.saved().len(), 1);
        assert_eq!(*store.letter(), CoverLetter::default());
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut store = new_store();
        store.update(CoverLetter {
            body_paragraphs: vec!["One.".to_string(), "Two.".to_string()],
            subject: "Senior Engineer role".to_string(),
            template: LetterStyle::Modern,
            ..acme_letter()
        });
        let exported = store.export_json().expect("export");

        let mut other = new_store();
        other.import_json(&exported).expect("import");
        assert_eq!(other.letter(), store.letter());
    }

    #[test]
    fn test_import_partial_object_merges_only_present_keys() {
        let mut store = new_store();
        store.update(acme_letter());
        store
            .import_json(r#"{"companyName": "X"}"#)
            .expect("partial import");
        assert_eq!(store.letter().company_name, "X");
        // Everything else keeps its prior value.
        assert_eq!(store.letter().introduction, "I am writing to apply.");
        assert_eq!(store.letter().greeting, "Dear Hiring Manager,");
    }

    #[test]
    fn test_import_malformed_json_aborts_with_state_intact() {
        let mut store = new_store();
        store.update(acme_letter());
        let err = store.import_json("{oops").expect_err("must reject");
        assert!(matches!(err, AppError::Malformed(_)));
        assert_eq!(store.letter().company_name, "Acme");
    }

    #[test]
    fn test_import_non_object_rejected() {
        let mut store = new_store();
        let err = store.import_json(r#"[1, 2, 3]"#).expect_err("must reject");
        assert!(matches!(err, AppError::Malformed(_)));
    }

    #[test]
    fn test_import_wrong_value_type_rejected() {
        let mut store = new_store();
        store.update(acme_letter());
        let err = store
            .import_json(r#"{"bodyParagraphs": 42}"#)
            .expect_err("must reject");
        assert!(matches!(err, AppError::Malformed(_)));
        assert_eq!(store.letter().company_name, "Acme");
    }

    #[test]
    fn test_reopen_restores_letter_and_snapshots() {
        let storage = Arc::new(MemoryStorage::new());
        let id;
        {
            let mut store =
                CoverLetterStore::open(storage.clone() as Arc<dyn StorageBackend>);
            store.update(acme_letter());
            id = store.save("Draft");
        }
        let store = CoverLetterStore::open(storage as Arc<dyn StorageBackend>);
        assert_eq!(store.letter().company_name, "Acme");
        assert_eq!(store.saved().len(), 1);
        assert_eq!(store.saved()[0].id, id);
    }
}
