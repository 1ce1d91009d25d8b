use crate::session::traits::KeyValueStore;
use anyhow::{anyhow, Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// In-memory slots. Clones share state, which makes a "reload" just another
/// `Session::load` over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().map_err(|_| anyhow!("storage lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| anyhow!("storage lock poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| anyhow!("storage lock poisoned"))?;
        slots.remove(key);
        Ok(())
    }
}

/// Slots kept as one JSON object in a file under the data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "storage.json";

    /// Store backed by `<dir>/storage.json`; the directory is created on first write
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn write_all(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(slots)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!("Wrote {} slots to {}", slots.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.read_all()?;
        slots.insert(key.to_string(), value.to_string());
        self.write_all(&slots)
    }

    fn clear(&self, key: &str) -> Result<()> {
        let mut slots = self.read_all()?;
        if slots.remove(key).is_some() {
            self.write_all(&slots)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_slots() {
        let store = MemoryStore::new();
        let reloaded = store.clone();
        store.set("makan_user", "{}").unwrap();
        assert_eq!(reloaded.get("makan_user").unwrap().as_deref(), Some("{}"));

        reloaded.clear("makan_user").unwrap();
        assert_eq!(store.get("makan_user").unwrap(), None);
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(&dir.path().join("nested"));
        assert_eq!(store.get("makan_user").unwrap(), None);

        store.set("makan_user", r#"{"id":"user_1"}"#).unwrap();
        store.set("other", "x").unwrap();

        let reopened = FileStore::in_dir(&dir.path().join("nested"));
        assert_eq!(
            reopened.get("makan_user").unwrap().as_deref(),
            Some(r#"{"id":"user_1"}"#)
        );

        reopened.clear("makan_user").unwrap();
        reopened.clear("missing").unwrap();
        assert_eq!(store.get("makan_user").unwrap(), None);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());
        std::fs::write(store.path(), "not json").unwrap();
        assert!(store.get("makan_user").is_err());
    }
}
