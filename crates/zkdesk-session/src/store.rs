//! # Artifact Store
//!
//! Text-keyed, text-valued persistence for encoded artifacts and small
//! scalars, scoped to a single local session.
//!
//! ## Contract
//!
//! - `get` on a missing key fails with [`StoreError::NotFound`]; callers
//!   check `contains` or handle the failure before dependent operations.
//! - `remove` is idempotent — removing a missing key is not an error.
//! - Every write replaces the key's value whole. [`FileStore`] rewrites
//!   its entire backing file per mutation, so an interrupted operation
//!   leaves the prior artifact intact rather than a corrupted one.
//! - Persistence survives process restart ([`FileStore`]) but not
//!   `clear_all`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error from an artifact store operation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested key holds no value.
    #[error("artifact not found under key `{key}`")]
    NotFound {
        /// The key that was requested.
        key: String,
    },

    /// The backing file could not be read or written.
    #[error("artifact store io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not contain a valid key-value object.
    #[error("artifact store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A key-value store for encoded artifacts.
///
/// Keys in use by the session controller: `setup_params`, `proof`,
/// `circuit_index`.
pub trait ArtifactStore {
    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Fetch the value under `key`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when the key holds no value.
    fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Whether `key` currently holds a value.
    fn contains(&self, key: &str) -> bool;

    /// Remove the value under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Wipe every key.
    fn clear_all(&mut self) -> Result<(), StoreError>;
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactStore for MemoryStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String, StoreError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }
}

/// File-backed store: one JSON object per session file.
///
/// The whole map is loaded at open and rewritten on every mutation. This
/// is the "survives page reload" persistence of the original system,
/// expressed as a session file on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or create) the store backed by `path`.
    ///
    /// A missing file is an empty store; the file is created on first
    /// write. Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// [`StoreError::Corrupt`] when an existing file is not a JSON object
    /// of string keys and values.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let text = fs::read_to_string(&path)?;
            serde_json::from_str(&text)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl ArtifactStore for FileStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn get(&self, key: &str) -> Result<String, StoreError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.flush()
    }
}
