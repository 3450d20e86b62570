//! Error types for the session layer.

use roadwatch_model::ModelError;
use roadwatch_storage::StorageError;

/// Errors that can occur inside the session layer.
///
/// None of these escape [`SessionStore`](crate::SessionStore)'s public
/// operations: a rejected login becomes `false`, and storage or codec
/// failures are logged and absorbed. They surface from
/// [`Authenticator`](crate::Authenticator) implementations and from the
/// store's internal load/persist helpers.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The handle/secret pair was rejected.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The durable slot couldn't be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted identity couldn't be encoded or decoded.
    #[error(transparent)]
    Model(#[from] ModelError),
}
