//! Route guard and its two-state machine.

use roadwatch_session::Session;
use serde::{Deserialize, Serialize};

use crate::routes;

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

/// The guard's verdict for one protected route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path")]
pub enum Access {
    /// Render the wrapped content unchanged.
    Allow,

    /// Render nothing and go to this path instead.
    RedirectTo(String),
}

impl Access {
    /// `true` for [`Access::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

// ---------------------------------------------------------------------------
// GuardState
// ---------------------------------------------------------------------------

/// The guard's state, driven solely by the session's authenticated flag.
///
/// ```text
///   Unauthorized ──(login)──→ Authorized
///        ↑                        │
///        └───────(logout)─────────┘
/// ```
///
/// There is no "checking" state: the session is local, so the answer is
/// always available synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardState {
    Authorized,
    Unauthorized,
}

impl GuardState {
    /// Derives the state from a session.
    pub fn of(session: &Session) -> Self {
        if session.is_authenticated() {
            Self::Authorized
        } else {
            Self::Unauthorized
        }
    }
}

impl std::fmt::Display for GuardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authorized => write!(f, "Authorized"),
            Self::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

// ---------------------------------------------------------------------------
// RouteGuard
// ---------------------------------------------------------------------------

/// Gates protected routes on the current session.
///
/// Holds no session of its own: call [`authorize`](Self::authorize)
/// again whenever the session changes or a protected route is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    login_path: String,
}

impl RouteGuard {
    /// A guard that redirects to `login_path`.
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    /// Where unauthenticated visitors are sent.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Allow iff someone is signed in; otherwise redirect to login.
    pub fn authorize(&self, session: &Session) -> Access {
        match GuardState::of(session) {
            GuardState::Authorized => Access::Allow,
            GuardState::Unauthorized => {
                tracing::debug!(to = %self.login_path, "guard redirecting anonymous visitor");
                Access::RedirectTo(self.login_path.clone())
            }
        }
    }

    /// Runs `render` only if access is allowed.
    ///
    /// On redirect `render` is never called, so no part of the protected
    /// content is ever produced.
    pub fn guard<T>(
        &self,
        session: &Session,
        render: impl FnOnce() -> T,
    ) -> Result<T, String> {
        match self.authorize(session) {
            Access::Allow => Ok(render()),
            Access::RedirectTo(path) => Err(path),
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(routes::LOGIN)
    }
}
