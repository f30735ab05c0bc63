//! Storage layer for Spendwise
//!
//! A small key-value abstraction with file and in-memory backends, and the
//! input store that persists `BudgetInputs` through it.

pub mod file_io;
pub mod kv;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use store::{keys, BudgetInputStore};

use crate::config::paths::SpendwisePaths;
use crate::error::SpendwiseError;

/// Open the input store on the file backend under the data directory
pub fn open_file_store(
    paths: &SpendwisePaths,
) -> Result<BudgetInputStore<FileKeyValueStore>, SpendwiseError> {
    paths.ensure_directories()?;
    Ok(BudgetInputStore::open(FileKeyValueStore::new(paths.data_dir())))
}
