//! Autosave persistence over a local key-value store
//!
//! The document is stored as JSON under [`CONTENT_KEY`] and the time of the
//! save, formatted for display, under [`LAST_SAVED_KEY`]. Every save overwrites
//! both entries; the last writer wins.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{EditorError, Result};
use crate::model::Document;

/// Store key for the serialized document
pub const CONTENT_KEY: &str = "heartpad-content";
/// Store key for the human-readable last-saved time
pub const LAST_SAVED_KEY: &str = "heartpad-last-saved";

/// A string-keyed, string-valued local store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, for tests and hosts without a disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The whole file is rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store file; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                EditorError::Storage(format!("Failed to parse {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| EditorError::Storage(e.to_string()))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// One persisted snapshot: serialized document plus display time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutosaveRecord {
    pub content: String,
    pub saved_at: String,
}

impl AutosaveRecord {
    /// Snapshot a document, stamped with the current local time
    pub fn capture(doc: &Document) -> Result<Self> {
        Ok(Self {
            content: serialize(doc)?,
            saved_at: timestamp_now(),
        })
    }

    /// Write both entries, overwriting whatever was there
    pub fn write_to(&self, store: &mut impl KeyValueStore) -> Result<()> {
        store.set(CONTENT_KEY, &self.content)?;
        store.set(LAST_SAVED_KEY, &self.saved_at)
    }
}

/// Document restored from the store at startup
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: Document,
    pub saved_at: Option<String>,
}

/// Local wall-clock time for display, e.g. `14:03:27`
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

pub fn serialize(doc: &Document) -> Result<String> {
    serde_json::to_string(doc).map_err(|e| EditorError::Storage(e.to_string()))
}

pub fn deserialize(content: &str) -> Result<Document> {
    serde_json::from_str(content).map_err(|e| EditorError::ImportDecode(e.to_string()))
}

/// Serialize and store the document now, returning what was written
pub fn save(doc: &Document, store: &mut impl KeyValueStore) -> Result<AutosaveRecord> {
    let record = AutosaveRecord::capture(doc)?;
    record.write_to(store)?;
    tracing::debug!(bytes = record.content.len(), saved_at = %record.saved_at, "saved document");
    Ok(record)
}

/// Read the stored document, if any
pub fn load(store: &impl KeyValueStore) -> Result<Option<LoadedDocument>> {
    let Some(content) = store.get(CONTENT_KEY)? else {
        return Ok(None);
    };
    let document = deserialize(&content)?;
    let saved_at = store.get(LAST_SAVED_KEY)?;
    Ok(Some(LoadedDocument { document, saved_at }))
}

/// Fixed-interval autosave schedule
#[derive(Debug, Clone, Copy)]
pub struct AutosaveTimer {
    interval: Duration,
    last: Instant,
}

impl AutosaveTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last) >= self.interval
    }

    /// Restart the interval from `now`
    pub fn mark(&mut self, now: Instant) {
        self.last = now;
    }
}
