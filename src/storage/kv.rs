//! Key-value persistence backends
//!
//! The input store only needs three operations from its backing storage:
//! read a key, write a key, remove a key. Values are opaque strings (JSON in
//! practice). Each key is written independently of the others.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{SpendwiseError, SpendwiseResult};

use super::file_io::{read_text, remove_file_if_exists, write_text_atomic};

/// Durable string storage addressed by key
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> SpendwiseResult<Option<String>>;

    /// Store `value` under `key`, replacing what was there
    fn set_item(&mut self, key: &str, value: &str) -> SpendwiseResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&mut self, key: &str) -> SpendwiseResult<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> SpendwiseResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SpendwiseError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> SpendwiseResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set_item(&mut self, key: &str, value: &str) -> SpendwiseResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }

    fn remove_item(&mut self, key: &str) -> SpendwiseResult<()> {
        remove_file_if_exists(self.path_for(key)?)
    }
}

/// In-memory store, for tests and for embedding without a filesystem
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    items: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes once keys plus values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            items: BTreeMap::new(),
            quota_bytes: Some(bytes),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> SpendwiseResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> SpendwiseResult<()> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(SpendwiseError::Storage(format!(
                    "Storage quota exceeded writing '{}': {} of {} bytes",
                    key, needed, quota
                )));
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> SpendwiseResult<()> {
        self.items.remove(key);
        Ok(())
    }
}
