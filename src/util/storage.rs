//! Durable key-value persistence for user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences are stored as JSON strings under stable keys. The
//! [`PreferenceStore`] trait hides where those strings live so the settings
//! store works the same against browser `localStorage`, a JSON file on disk,
//! or an in-memory map in tests.
//!
//! ERROR HANDLING
//! ==============
//! Adapters report failures as [`StorageError`]. [`load_json`] folds every
//! read failure into `None` so callers fall back to their declared default.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure reported by a storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-keyed durable store holding raw JSON text.
pub trait PreferenceStore {
    /// Read the raw value for `key`; `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `raw` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store refuses the write.
    fn write(&self, key: &str, raw: &str) -> Result<(), StorageError>;
}

/// Load and decode a JSON value for `key`.
///
/// Missing keys, unreachable storage and undecodable values all yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn PreferenceStore, key: &str) -> Option<T> {
    let raw = match store.read(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::debug!("preference read failed: key={key} error={e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("preference decode failed: key={key} error={e}");
            None
        }
    }
}

/// Encode `value` as JSON and write it under `key`.
///
/// # Errors
///
/// Returns an error if encoding fails or the store rejects the write.
pub fn save_json<T: Serialize>(store: &dyn PreferenceStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.write(key, &raw)
}

/// In-memory store, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value currently held for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), raw.to_owned());
        Ok(())
    }
}

/// Store backed by a single JSON object file mapping keys to raw values.
///
/// The file is re-read on every access so several stores pointed at the same
/// path observe each other's writes.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_map()?.remove(key))
    }

    /// A file that no longer parses is replaced rather than blocking every later write.
    fn write(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        let mut map = match self.load_map() {
            Ok(map) => map,
            Err(StorageError::Encode(e)) => {
                log::warn!("settings file unreadable, starting fresh: path={} error={e}", self.path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_owned(), raw.to_owned());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

/// Browser `localStorage` adapter.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, raw)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}

/// Store for the current environment: `localStorage` in the browser, memory elsewhere.
pub fn default_store() -> Rc<dyn PreferenceStore> {
    #[cfg(feature = "csr")]
    {
        Rc::new(LocalStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(MemoryStore::new())
    }
}
