use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{Storage, StorageError};

/// File-backed storage: one file per key under a single directory.
///
/// Values are written through a sibling temp file and renamed into
/// place, so a crashed write never leaves a truncated value behind.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage in the platform config directory.
    ///
    /// Uses `~/.config/mcpconf` on Unix/macOS, or equivalent via
    /// `dirs::config_dir()`. Falls back to the current directory if
    /// config_dir is unavailable.
    pub fn in_config_dir() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(config_dir.join("mcpconf"))
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Write {
            path: self.dir.clone(),
            source: e,
        })
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read { path, source: e }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let path = self.path_for(key);
        let tmp = with_tmp_extension(&path);
        fs::write(&tmp, value).map_err(|e| StorageError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::Write { path, source: e })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove { path, source: e }),
        }
    }
}

fn with_tmp_extension(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        assert!(storage.get("mcp").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());
        storage.set("mcp", "{\"a\":1}").unwrap();
        assert_eq!(storage.get("mcp").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn set_creates_the_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let mut storage = FileStorage::new(&nested);
        storage.set("mcp", "x").unwrap();
        assert!(nested.join("mcp.json").exists());
    }

    #[test]
    fn set_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());
        storage.set("mcp", "value").unwrap();
        assert!(!temp_dir.path().join("mcp.json.tmp").exists());
    }

    #[test]
    fn remove_deletes_the_value() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());
        storage.set("mcp", "value").unwrap();
        storage.remove("mcp").unwrap();
        assert!(storage.get("mcp").unwrap().is_none());
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());
        assert!(storage.remove("mcp").is_ok());
    }
}
