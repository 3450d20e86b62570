//! Durable key-value storage for Road Watch.
//!
//! Provides the [`KeyValueStore`] trait, a small string-to-string slot
//! store in the spirit of browser local storage, and two backends:
//!
//! - [`MemoryStore`]: process-local; clones share one map, which is how
//!   tests model two windows over the same storage.
//! - [`FileStore`]: a JSON object file on disk (feature `file`, default).
//!
//! # Feature Flags
//!
//! - `file` (default): the on-disk backend via `serde_json`

mod error;
#[cfg(feature = "file")]
mod file;
mod memory;

pub use error::StorageError;
#[cfg(feature = "file")]
pub use file::FileStore;
pub use memory::MemoryStore;

/// A store of string values under string keys.
///
/// Reads and writes are synchronous: the session layer treats storage
/// as a local slot, never as something to await.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns the value under `key`, or `Ok(None)` if there isn't one.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Returns `true` if a value exists under `key`.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}
