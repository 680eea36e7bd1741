//! Local draft persistence
//!
//! The registration form mirrors its full state into a single local slot
//! on every change so a reload can pick up where the visitor left off.
//! Last write wins; the slot is cleared after a successful submission.
//! No expiry, no versioning.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use shared::models::FamilySubmission;

/// Fixed storage key for the registration draft slot
pub const DRAFT_STORAGE_KEY: &str = "member-registry-draft";

/// In-progress registration form state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub family: Vec<FamilySubmission>,
}

/// Key-value persistence behind the draft slot.
///
/// Injected into the form layer so tests can swap the file-backed store
/// for an in-memory one without touching form logic.
pub trait DraftStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn clear(&mut self, key: &str);
}

/// Load the draft from a store.
///
/// Absent or unparseable drafts yield form defaults; a corrupt slot never
/// surfaces an error to the visitor.
pub fn load_draft(store: &dyn DraftStore) -> Draft {
    store
        .get(DRAFT_STORAGE_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Overwrite the draft slot with the current form state
pub fn save_draft(store: &mut dyn DraftStore, draft: &Draft) {
    if let Ok(raw) = serde_json::to_string(draft) {
        store.set(DRAFT_STORAGE_KEY, &raw);
    }
}

/// Drop the draft after a successful submission
pub fn clear_draft(store: &mut dyn DraftStore) {
    store.clear(DRAFT_STORAGE_KEY);
}

/// In-memory store (tests, previews)
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    slots: HashMap<String, String>,
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

/// File-backed store - one file per key under a base directory
#[derive(Debug)]
pub struct FileDraftStore {
    dir: PathBuf,
}

impl FileDraftStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl DraftStore for FileDraftStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // A draft is a convenience; losing one is not worth failing the form
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!("Failed to create draft directory: {e}");
            return;
        }
        if let Err(e) = fs::write(self.path(key), value) {
            tracing::warn!("Failed to persist draft: {e}");
        }
    }

    fn clear(&mut self, key: &str) {
        let _ = fs::remove_file(self.path(key));
    }
}
