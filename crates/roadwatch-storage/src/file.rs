//! On-disk [`KeyValueStore`] backed by a single JSON object file.
//!
//! The file holds `{ "key": "value", ... }`. A missing file is an empty
//! store. Writes go to a uniquely named sibling temp file and are
//! renamed into place, so a crash mid-write leaves the previous
//! contents intact.
//!
//! A file that doesn't parse is reported as [`StorageError::Corrupt`] on
//! read. The next write replaces it with a fresh object, the way a
//! browser `setItem` overwrites whatever was in the slot.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

use crate::{KeyValueStore, StorageError};

type Slots = BTreeMap<String, String>;

/// A store persisted to one JSON file.
///
/// Cloning yields another handle to the same file. Every operation
/// re-reads the file, so handles never hold stale copies, and clones
/// share one write lock so their read-modify-write cycles don't
/// interleave.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Opens (lazily) the store at `path`. The file is created on the
    /// first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Slots, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(Slots::new());
            }
            Err(e) => return Err(StorageError::ReadFailed(e)),
        };

        if text.trim().is_empty() {
            return Ok(Slots::new());
        }

        serde_json::from_str(&text)
            .map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Loads the slots for a write. A corrupt file counts as empty;
    /// the returned flag says the file must be rewritten.
    fn load_for_write(&self) -> Result<(Slots, bool), StorageError> {
        match self.load() {
            Ok(slots) => Ok((slots, false)),
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "discarding corrupt storage file"
                );
                Ok((Slots::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, slots: &Slots) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)
                    .map_err(StorageError::WriteFailed)?;
                parent
            }
            _ => Path::new("."),
        };

        let text = serde_json::to_string_pretty(slots)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        let mut tmp =
            NamedTempFile::new_in(dir).map_err(StorageError::WriteFailed)?;
        tmp.write_all(text.as_bytes())
            .map_err(StorageError::WriteFailed)?;
        tmp.persist(&self.path)
            .map_err(|e| StorageError::WriteFailed(e.error))?;

        tracing::trace!(path = %self.path.display(), keys = slots.len(), "storage file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let _held = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        let (mut slots, _) = self.load_for_write()?;
        slots.insert(key.to_string(), value.to_string());
        self.save(&slots)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let _held = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        let (mut slots, reset) = self.load_for_write()?;
        if slots.remove(key).is_some() || reset {
            self.save(&slots)?;
        }
        Ok(())
    }
}
