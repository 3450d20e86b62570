/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading the backing medium failed.
    #[error("storage read failed: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Writing the backing medium failed.
    #[error("storage write failed: {0}")]
    WriteFailed(#[source] std::io::Error),

    /// The backing medium exists but doesn't hold a key-value map.
    #[error("storage is corrupt: {0}")]
    Corrupt(String),

    /// Another thread panicked while holding the store's lock.
    #[error("storage lock poisoned")]
    Poisoned,
}
