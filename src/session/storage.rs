//! Persistent key-value storage backing the session
//!
//! The file store keeps a flat YAML map on disk and writes through on every
//! change, so a value set by one invocation is visible to the next.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

type Result<T> = std::result::Result<T, StorageError>;

/// Minimal string key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, persisting it immediately
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a value, persisting the removal immediately
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Human-readable location of the backing storage
    fn location(&self) -> String;
}

/// YAML-file backed store at `~/.chatline/session.yaml` by default
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Get the default session file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(StorageError::NoHome)?;
        Ok(home.join(".chatline").join("session.yaml"))
    }

    /// Open the store at the given path, or the default path
    pub fn open_at(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };
        Self::open(&path)
    }

    /// Open the store at a specific path. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| StorageError::Read(format!("{}: {}", path.display(), e)))?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_yaml::from_str(&contents)?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::Write(format!("{}: {}", parent.display(), e)))?;
        }

        let contents =
            serde_yaml::to_string(&self.entries).map_err(|e| StorageError::Write(e.to_string()))?;
        std::fs::write(&self.path, contents)
            .map_err(|e| StorageError::Write(format!("{}: {}", self.path.display(), e)))?;

        // The token is a credential: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, perms)
                .map_err(|e| StorageError::Write(e.to_string()))?;
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
