//! Authentication hook for checking a login attempt.
//!
//! The dashboard has no real directory service. [`StaticCredentials`]
//! accepts exactly one handle/secret pair and hands back a fixed
//! identity. It is a placeholder: no hashing, no rate limiting, no
//! lockout. A real backend plugs in by implementing [`Authenticator`];
//! the session store doesn't change.

use std::future::Future;

use roadwatch_model::{Identity, IdentityId, Role};

use crate::SessionError;

/// Handle accepted by [`StaticCredentials::default`].
pub const DEFAULT_HANDLE: &str = "admin";

/// Secret accepted by [`StaticCredentials::default`].
pub const DEFAULT_SECRET: &str = "password123";

/// Avatar URI used for the default identity and display fallbacks.
pub const DEFAULT_AVATAR: &str =
    "https://api.dicebear.com/7.x/avataaars/svg?seed=admin";

/// The identity produced by a successful placeholder login.
pub fn default_identity() -> Identity {
    Identity {
        id: IdentityId::new("user-001"),
        username: DEFAULT_HANDLE.to_string(),
        name: "John Doe".to_string(),
        role: Role::Dvla,
        avatar: DEFAULT_AVATAR.to_string(),
        email: Some("admin@example.com".to_string()),
        phone: Some("+233 20 123 4567".to_string()),
        department: Some("Road Safety Division".to_string()),
    }
}

/// Checks a login attempt and returns who it belongs to.
///
/// # Trait bounds
///
/// - `Send + Sync + 'static` → the authenticator lives inside the
///   session store for the whole life of the application shell, which
///   may be shared across tasks.
///
/// # Example
///
/// ```rust
/// use roadwatch_model::Identity;
/// use roadwatch_session::{Authenticator, SessionError, default_identity};
///
/// /// Lets anyone in. Tests only.
/// struct OpenDoor;
///
/// impl Authenticator for OpenDoor {
///     async fn authenticate(
///         &self,
///         handle: &str,
///         _secret: &str,
///     ) -> Result<Identity, SessionError> {
///         let mut identity = default_identity();
///         identity.username = handle.to_string();
///         Ok(identity)
///     }
/// }
/// ```
pub trait Authenticator: Send + Sync + 'static {
    /// Validates the pair and returns the matching identity.
    ///
    /// # Returns
    /// - `Ok(Identity)`: accepted
    /// - `Err(SessionError::AuthFailed)`: rejected
    fn authenticate(
        &self,
        handle: &str,
        secret: &str,
    ) -> impl Future<Output = Result<Identity, SessionError>> + Send;
}

// ---------------------------------------------------------------------------
// StaticCredentials
// ---------------------------------------------------------------------------

/// Accepts one fixed handle/secret pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    handle: String,
    secret: String,
    identity: Identity,
}

impl StaticCredentials {
    /// Accepts `handle`/`secret` and signs in as `identity`.
    pub fn new(
        handle: impl Into<String>,
        secret: impl Into<String>,
        identity: Identity,
    ) -> Self {
        Self {
            handle: handle.into(),
            secret: secret.into(),
            identity,
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_HANDLE, DEFAULT_SECRET, default_identity())
    }
}

impl Authenticator for StaticCredentials {
    async fn authenticate(
        &self,
        handle: &str,
        secret: &str,
    ) -> Result<Identity, SessionError> {
        if handle == self.handle && secret == self.secret {
            Ok(self.identity.clone())
        } else {
            Err(SessionError::AuthFailed("invalid credentials".into()))
        }
    }
}
