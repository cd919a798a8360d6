//! Key-value storage over a directory of JSON files.

use std::path::{Path, PathBuf};

use aspersax_core::{KeyValueStore, StorageError};

use super::atomic_file::AtomicFile;

/// Stores each key as `<dir>/<key>.json`.
///
/// Keys are the fixed collection names, so they are used as file names
/// verbatim; anything outside `[A-Za-z0-9_-]` is rejected.
#[derive(Debug, Clone)]
pub struct JsonDirStorage {
    dir: PathBuf,
}

impl JsonDirStorage {
    /// Opens storage in `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        tracing::debug!("[JsonDirStorage] Using data directory {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file(&self, key: &str) -> Result<AtomicFile, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::Io(format!("invalid storage key '{}'", key)));
        }
        Ok(AtomicFile::new(self.dir.join(format!("{}.json", key))))
    }
}

impl KeyValueStore for JsonDirStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.file(key)?.read()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.file(key)?.write(value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.file(key)?.remove()
    }
}
