use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const USER_STORAGE_KEY: &str = "user-storage";
pub const DESIGN_SYSTEM_STORAGE_KEY: &str = "design-system-storage";
pub const GETTING_STARTED_DISMISSED_KEY: &str = "mockman-getting-started-dismissed";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage snapshot is not valid json: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Envelope<T> {
    state: T,
    version: u32,
}

/// Key-value snapshot storage: one pretty-printed JSON file per key under the
/// data directory. Snapshots are restored as written; there is no migration.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    pub fn load<T>(&self, key: &str) -> Result<T, StorageError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(T::default());
        }
        let raw = fs::read_to_string(&path)?;
        let envelope: Envelope<T> = serde_json::from_str(&raw)?;
        tracing::debug!(key, version = envelope.version, "loaded snapshot");
        Ok(envelope.state)
    }

    pub fn save<T>(&self, key: &str, state: &T) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        fs::create_dir_all(&self.root)?;
        let data = serde_json::to_string_pretty(&Envelope { state, version: 0 })?;
        fs::write(self.path_for(key), data)?;
        tracing::debug!(key, "saved snapshot");
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn get_flag(&self, key: &str) -> Result<bool, StorageError> {
        self.load::<bool>(key)
    }

    pub fn set_flag(&self, key: &str, value: bool) -> Result<(), StorageError> {
        self.save(key, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::{SnapshotStore, GETTING_STARTED_DISMISSED_KEY};
    use serde::{Deserialize, Serialize};
    use tempfile::tempdir;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Counter {
        count: u32,
    }

    #[test]
    fn load_defaults_when_missing_file() {
        let dir = tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path());
        let loaded: Counter = store.load("counter").expect("load");
        assert_eq!(loaded, Counter::default());
    }

    #[test]
    fn save_then_load_restores_state() {
        let dir = tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path().join("nested"));
        store.save("counter", &Counter { count: 7 }).expect("save");

        let loaded: Counter = store.load("counter").expect("load");
        assert_eq!(loaded.count, 7);

        let raw = std::fs::read_to_string(store.path_for("counter")).expect("raw");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["count"], 7);
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path());
        std::fs::write(store.path_for("counter"), "{ not json").expect("write");
        assert!(store.load::<Counter>("counter").is_err());
    }

    #[test]
    fn flags_default_false_and_persist() {
        let dir = tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path());
        assert!(!store.get_flag(GETTING_STARTED_DISMISSED_KEY).expect("flag"));
        store
            .set_flag(GETTING_STARTED_DISMISSED_KEY, true)
            .expect("set");
        assert!(store.get_flag(GETTING_STARTED_DISMISSED_KEY).expect("flag"));
        store.remove(GETTING_STARTED_DISMISSED_KEY).expect("remove");
        assert!(!store.get_flag(GETTING_STARTED_DISMISSED_KEY).expect("flag"));
    }
}
