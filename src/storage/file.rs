use super::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// All slots live in one JSON object on disk. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

type SlotMap = BTreeMap<String, String>;

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<SlotMap, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(SlotMap::new()),
            Err(err) => return Err(self.io_error(err)),
        };
        if raw.trim().is_empty() {
            return Ok(SlotMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Read for a write: an unreadable slot map is replaced rather than kept
    /// blocking every later write.
    fn read_slots_for_write(&self) -> Result<SlotMap, StorageError> {
        match self.read_slots() {
            Err(err @ StorageError::Corrupt { .. }) => {
                tracing::warn!(error = %err, "discarding unreadable store file");
                Ok(SlotMap::new())
            }
            other => other,
        }
    }

    fn write_slots(&self, slots: &SlotMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let encoded = serde_json::to_string_pretty(slots).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.tmp_path();
        fs::write(&tmp, encoded).map_err(|err| self.io_error(err))?;
        fs::rename(&tmp, &self.path).map_err(|err| self.io_error(err))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_slots()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.read_slots_for_write()?;
        slots.insert(key.to_string(), value.to_string());
        self.write_slots(&slots)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut slots = self.read_slots_for_write()?;
        if slots.remove(key).is_some() {
            self.write_slots(&slots)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FileStore;
    use crate::storage::{KeyValueStore, StorageError};

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("slots.json"));
        assert_eq!(store.get("anything").expect("get"), None);
    }

    #[test]
    fn slots_survive_a_new_handle() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("slots.json");

        let mut store = FileStore::new(&path);
        store.set("a", "1").expect("set a");
        store.set("b", "2").expect("set b");
        store.remove("a").expect("remove a");

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("a").expect("get a"), None);
        assert_eq!(reopened.get("b").expect("get b").as_deref(), Some("2"));
        assert!(!dir.path().join("nested").join("slots.json.tmp").exists());
    }

    #[test]
    fn garbage_file_is_reported_as_corrupt() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("slots.json");
        std::fs::write(&path, "not json").expect("write");

        let store = FileStore::new(&path);
        assert!(matches!(store.get("k"), Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn write_replaces_garbage_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("slots.json");
        std::fs::write(&path, "garbage").expect("write");

        let mut store = FileStore::new(&path);
        store.set("k", "v").expect("set over garbage");

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("k").expect("get").as_deref(), Some("v"));
    }
}
