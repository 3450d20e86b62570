//! Unified error type for Road Watch.

use roadwatch_model::ModelError;
use roadwatch_session::SessionError;
use roadwatch_storage::StorageError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `roadwatch` crate you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant generates the `From` impls, so `?`
/// converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum RoadwatchError {
    /// A record couldn't be encoded or decoded.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A storage backend failed (I/O, corrupt file).
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A session-level error (auth, storage underneath).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A configuration value is missing its shape or out of range.
    #[error("invalid config: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_model_error() {
        let err = ModelError::InvalidRecord("no id".into());
        let roadwatch_err: RoadwatchError = err.into();
        assert!(matches!(roadwatch_err, RoadwatchError::Model(_)));
        assert!(roadwatch_err.to_string().contains("no id"));
    }

    #[test]
    fn test_from_storage_error() {
        let err = StorageError::Corrupt("not an object".into());
        let roadwatch_err: RoadwatchError = err.into();
        assert!(matches!(roadwatch_err, RoadwatchError::Storage(_)));
    }

    #[test]
    fn test_from_session_error() {
        let err = SessionError::AuthFailed("nope".into());
        let roadwatch_err: RoadwatchError = err.into();
        assert!(matches!(roadwatch_err, RoadwatchError::Session(_)));
        assert!(roadwatch_err.to_string().contains("nope"));
    }

    #[test]
    fn test_config_error_message() {
        let err = RoadwatchError::Config("login_path must start with '/'".into());
        assert_eq!(
            err.to_string(),
            "invalid config: login_path must start with '/'"
        );
    }
}
