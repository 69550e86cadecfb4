//! Durable key-value storage of JSON strings.
//!
//! The launcher keeps three records: settings, user data, and the last-seen
//! version marker. Every read tolerates missing or malformed data; every
//! write failure is logged by the caller and never blocks the session.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StorageError;

pub mod user_data;

pub use user_data::{UserData, load_user_data, save_user_data};

/// Key of the appearance settings record.
pub const SETTINGS_STORAGE_KEY: &str = "launchgrid.settings.v1";
/// Key of the user data record (hidden ids, custom entries, page size).
pub const USER_DATA_STORAGE_KEY: &str = "launchgrid.userdata.v1";
/// Key of the last-seen version marker.
pub const VERSION_STORAGE_KEY: &str = "launchgrid.version";

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// What: Read the value stored under `key`.
    ///
    /// Output:
    /// - `Ok(None)` when the key was never written.
    ///
    /// # Errors
    /// - `StorageError` when the backing medium fails.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// What: Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - `StorageError` when the write could not be completed.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: one `<key>.json` file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding the record files.
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the record files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(io_err)?;
        tracing::trace!(path = %path.display(), bytes = value.len(), "[Persist] Wrote record");
        Ok(())
    }
}

/// In-memory store for tests and for sessions without a data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Stored values.
    values: HashMap<String, String>,
    /// When set, every write is rejected (simulates a full or read-only medium).
    fail_writes: bool,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every write.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            values: HashMap::new(),
            fail_writes: true,
        }
    }

    /// Store pre-seeded with one value.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Raw value under `key`, for assertions.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Rejected(key.to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// What: Read a key and decode it as JSON, degrading to `None`.
///
/// Inputs:
/// - `store`: Backing store.
/// - `key`: Record key.
///
/// Output:
/// - Parsed JSON, or `None` for a missing key, a read failure, or malformed JSON.
///
/// Details:
/// - Failures are logged with the key; callers fall back to defaults.
pub fn read_json(store: &dyn KeyValueStore, key: &str) -> Option<serde_json::Value> {
    let body = match store.read(key) {
        Ok(Some(body)) => body,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "[Persist] Failed to read record; using defaults");
            return None;
        }
    };
    match serde_json::from_str(&body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "[Persist] Malformed record; using defaults");
            None
        }
    }
}

/// What: Encode `value` as JSON and write it under `key`.
///
/// # Errors
/// - `StorageError::Encode` when serialization fails.
/// - Any error from the store's `write`.
pub fn write_json<T: serde::Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &body)
}
