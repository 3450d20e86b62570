//! Error types for the model layer.
//!
//! Each crate in Road Watch defines its own error enum. A `ModelError`
//! always means a record could not be turned into text or back, never
//! that storage or authentication misbehaved.

/// Errors that can occur while encoding or decoding records.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Serialization failed (turning a record into text).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning text into a record).
    ///
    /// Common causes: truncated JSON, a missing required field, or a
    /// role string outside the closed set.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The text parsed but doesn't describe a valid record.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
