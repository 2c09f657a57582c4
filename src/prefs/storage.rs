//! Key/value storage backing the preference stores.
//!
//! Each key maps to one text value. `FileStorage` keeps every key in its own
//! `<key>.json` file under the platform data directory, which gives the same
//! lifetime as browser local storage: values survive restarts on the same
//! machine and nothing more.

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Text storage addressed by stable keys
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Directory-backed storage, one file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir` (created on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage in the platform data directory
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("com", "mission-explorer", "MissionExplorer")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

        Ok(Self::new(dirs.data_dir().join("storage")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);

        // Write then rename so a crash never leaves a half-written value
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), value.len());
        Ok(())
    }
}

/// In-memory storage, used by tests and as a fallback when no data
/// directory is available
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("Storage lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("Storage lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_missing_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("nested"));

        assert_eq!(storage.read("favorites").unwrap(), None);
    }

    #[test]
    fn test_file_storage_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.write("darkMode", "false").unwrap();
        storage.write("darkMode", "true").unwrap();

        assert_eq!(storage.read("darkMode").unwrap().as_deref(), Some("true"));
        assert!(temp_dir.path().join("darkMode.json").exists());
        assert!(!temp_dir.path().join("darkMode.json.tmp").exists());
    }

    #[test]
    fn test_keys_are_independent() {
        let storage = MemoryStorage::new();
        storage.write("favorites", "[\"a\"]").unwrap();
        storage.write("darkMode", "true").unwrap();

        assert_eq!(storage.read("favorites").unwrap().as_deref(), Some("[\"a\"]"));
        assert_eq!(storage.read("darkMode").unwrap().as_deref(), Some("true"));
        assert_eq!(storage.read("other").unwrap(), None);
    }
}
