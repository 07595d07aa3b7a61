//! Key-value stores for preferences.
//!
//! Values are plain strings; structured values are JSON-encoded by the
//! caller. The file store keeps a copy in memory and rewrites the whole
//! file on every change.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::PrefsError;

/// A string-to-string preference namespace.
pub trait KeyValueStore {
    /// Read a value; `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Write a value, replacing any previous one.
    fn put(&mut self, key: &str, value: String) -> Result<(), PrefsError>;

    /// Delete a value. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), PrefsError>;
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object file.
///
/// The file is read once on [`open`](FileStore::open). Each write goes to
/// a sibling temporary file which is then renamed over the original, so a
/// crash mid-write leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(PrefsError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        debug!(path = %path.display(), keys = values.len(), "opened preference store");
        Ok(Self { path, values })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `values` to disk. The in-memory copy is only replaced by the
    /// caller once this succeeds.
    fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), PrefsError> {
        let io_err = |source: std::io::Error| PrefsError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), PrefsError> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), value);
        self.flush(&next)?;
        self.values = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        if !self.values.contains_key(key) {
            return Ok(());
        }
        let mut next = self.values.clone();
        next.remove(key);
        self.flush(&next)?;
        self.values = next;
        Ok(())
    }
}
